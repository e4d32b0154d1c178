#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::CliCommand;

#[derive(Debug, Clone)]
pub enum CliAction {
    ShowHelp,
    ShowVersion,
    RunProtocol,
    Command(CliCommand),
}

pub const USAGE: &str = "\
splits - application stage permission engine

Usage:
  splits                       read JSON requests from stdin, one per line
  splits <command> [flags]     run a single command

Commands:
  permissions  [--stage S] [--role R] [--recruiter-id ID]
  next-stage   --stage S [--recruiter-id ID] [--move-to-offer]
  plan         --stage S --action A [--role R] [--recruiter-id ID] [--note TEXT]
  categorize   --documents JSON_ARRAY
  stages
  help
  --json '<request>'

Global flags:
  --config PATH        config file (default .splits/config.toml)
  --output json|text   output format
  -h, --help           show this help
  -v, --version        show version
";
