#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::action::CliAction;
use super::args::ensure_no_unknown_flags;
use super::commands::CliCommand;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("Missing required argument: {}", arg)]
    MissingRequiredArg { arg: String },
    #[error("Unknown command: {}", cmd)]
    UnknownCommand { cmd: String },
    #[error("Unknown flag: {}", flag)]
    UnknownFlag { flag: String },
    #[error("Invalid type for {}", arg)]
    InvalidArgType { arg: String },
    #[error("Invalid argument value for {}: {}", arg, error)]
    InvalidArgValue { arg: String, error: String },
}

const PERMISSIONS_FLAGS: &[&str] = &["--stage", "--role", "--recruiter-id"];
const NEXT_STAGE_FLAGS: &[&str] = &["--stage", "--recruiter-id", "--move-to-offer"];
const PLAN_FLAGS: &[&str] = &["--stage", "--action", "--role", "--recruiter-id", "--note"];
const CATEGORIZE_FLAGS: &[&str] = &["--documents"];

/// Parses the arguments that follow the program name.
///
/// # Errors
/// Returns a `CliError` for unknown commands or flags and for missing or
/// malformed values.
pub fn parse_cli_args(args: &[String]) -> Result<CliAction, CliError> {
    if args
        .get(1)
        .is_some_and(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        return Ok(CliAction::ShowHelp);
    }

    match args.first().map(String::as_str) {
        None | Some("--") => Ok(CliAction::RunProtocol),
        Some("-h" | "--help") => Ok(CliAction::ShowHelp),
        Some("-v" | "--version") => Ok(CliAction::ShowVersion),
        Some("--json") => args.get(1).map_or_else(
            || {
                Err(CliError::MissingRequiredArg {
                    arg: "command".to_string(),
                })
            },
            |raw| Ok(CliAction::Command(CliCommand::Json(raw.clone()))),
        ),
        Some("?" | "help") => Ok(CliAction::Command(CliCommand::Help)),
        Some("stages") => {
            ensure_no_unknown_flags(args, &[])?;
            Ok(CliAction::Command(CliCommand::Stages))
        }
        Some("permissions") => {
            ensure_no_unknown_flags(args, PERMISSIONS_FLAGS)?;
            Ok(CliAction::Command(CliCommand::Permissions {
                stage: parse_optional_arg(args, "stage")?,
                role: parse_optional_arg(args, "role")?,
                recruiter_id: parse_optional_arg(args, "recruiter_id")?,
            }))
        }
        Some("next-stage") => {
            ensure_no_unknown_flags(args, NEXT_STAGE_FLAGS)?;
            Ok(CliAction::Command(CliCommand::NextStage {
                stage: parse_required_arg(args, "stage")?,
                recruiter_id: parse_optional_arg(args, "recruiter_id")?,
                move_to_offer: parse_optional_arg(args, "move_to_offer")?,
            }))
        }
        Some("plan") => {
            ensure_no_unknown_flags(args, PLAN_FLAGS)?;
            Ok(CliAction::Command(CliCommand::Plan {
                stage: parse_required_arg(args, "stage")?,
                action: parse_required_arg(args, "action")?,
                role: parse_optional_arg(args, "role")?,
                recruiter_id: parse_optional_arg(args, "recruiter_id")?,
                note: parse_optional_arg(args, "note")?,
            }))
        }
        Some("categorize") => {
            ensure_no_unknown_flags(args, CATEGORIZE_FLAGS)?;
            let raw: String = parse_required_arg(args, "documents")?;
            let documents =
                serde_json::from_str(&raw).map_err(|err| CliError::InvalidArgValue {
                    arg: "documents".to_string(),
                    error: err.to_string(),
                })?;
            Ok(CliAction::Command(CliCommand::Categorize { documents }))
        }
        Some(cmd) => Err(CliError::UnknownCommand {
            cmd: cmd.to_string(),
        }),
    }
}

fn parse_required_arg<T>(args: &[String], name: &str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let flag = format!("--{}", name.replace('_', "-"));
    let Some(position) = args.iter().position(|a| a.as_str() == flag) else {
        return Err(CliError::MissingRequiredArg {
            arg: name.to_string(),
        });
    };

    let Some(raw_value) = args.get(position + 1) else {
        return Err(CliError::MissingRequiredArg {
            arg: name.to_string(),
        });
    };

    if raw_value.starts_with("--") {
        return Err(CliError::MissingRequiredArg {
            arg: name.to_string(),
        });
    }

    raw_value
        .parse::<T>()
        .map_err(|_| CliError::InvalidArgType {
            arg: name.to_string(),
        })
}

fn parse_optional_arg<T>(args: &[String], name: &str) -> Result<Option<T>, CliError>
where
    T: std::str::FromStr + 'static,
    T::Err: std::fmt::Display,
{
    let flag = format!("--{}", name.replace('_', "-"));
    let position = args.iter().position(|a| a.as_str() == flag);

    match position {
        None => Ok(None),
        Some(i) => {
            let maybe_value = args.get(i + 1);
            let treat_as_boolean_flag = std::any::TypeId::of::<T>()
                == std::any::TypeId::of::<bool>()
                && maybe_value.is_none_or(|v| v.starts_with("--"));

            if treat_as_boolean_flag {
                return "true"
                    .parse::<T>()
                    .map(Some)
                    .map_err(|e| CliError::InvalidArgValue {
                        arg: name.to_string(),
                        error: format!("{e}"),
                    });
            }

            maybe_value
                .map(|v| {
                    if v.starts_with("--") {
                        return Err(CliError::MissingRequiredArg {
                            arg: name.to_string(),
                        });
                    }
                    v.parse::<T>().map_err(|e| CliError::InvalidArgValue {
                        arg: name.to_string(),
                        error: format!("{e}"),
                    })
                })
                .transpose()
        }
    }
}
