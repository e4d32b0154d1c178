#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::parser::CliError;
use std::path::PathBuf;

const VALID_COMMANDS: &[&str] = &[
    "permissions",
    "next-stage",
    "plan",
    "categorize",
    "stages",
    "help",
];

/// Flags accepted before or after any command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalFlags {
    pub config: Option<PathBuf>,
    pub output: Option<String>,
    pub rest: Vec<String>,
}

/// Pulls `--config` and `--output` out of the argument list.
///
/// # Errors
/// Returns `CliError::MissingRequiredArg` when a global flag has no value.
pub fn extract_global_flags(args: &[String]) -> Result<GlobalFlags, CliError> {
    let mut flags = GlobalFlags::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let value = iter.next().ok_or_else(|| CliError::MissingRequiredArg {
                    arg: "config".to_string(),
                })?;
                flags.config = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = iter.next().ok_or_else(|| CliError::MissingRequiredArg {
                    arg: "output".to_string(),
                })?;
                flags.output = Some(value.clone());
            }
            _ => flags.rest.push(arg.clone()),
        }
    }

    Ok(flags)
}

/// # Errors
/// Returns `CliError::UnknownFlag` if an unknown flag is found.
pub fn ensure_no_unknown_flags(args: &[String], allowed_flags: &[&str]) -> Result<(), CliError> {
    let invalid = args
        .iter()
        .skip(1)
        .find(|arg| {
            arg.starts_with("--")
                && !matches!(arg.as_str(), "--help" | "-h")
                && !allowed_flags.iter().any(|allowed| allowed == &arg.as_str())
        })
        .cloned();

    invalid.map_or(Ok(()), |flag| Err(CliError::UnknownFlag { flag }))
}

#[must_use]
pub fn suggest_commands(typo: &str) -> Vec<String> {
    VALID_COMMANDS
        .iter()
        .map(|cmd| (cmd, strsim::levenshtein(typo, cmd)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(cmd, _)| vec![(*cmd).to_string()])
        .unwrap_or_default()
}
