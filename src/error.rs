#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use thiserror::Error;

/// Error code constants for type-safe error handling
pub mod code {
    pub const CLI_ERROR: &str = "CLI_ERROR";
    pub const NOTFOUND: &str = "NOTFOUND";
    pub const INVALID: &str = "INVALID";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const DEPENDENCY: &str = "DEPENDENCY";
    pub const INTERNAL: &str = "INTERNAL";
}

#[derive(Error, Debug)]
pub enum SplitsError {
    #[error("Unknown stage: {0}")]
    InvalidStage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No application loaded")]
    NoApplication,

    #[error("Action {action} is not permitted at stage {stage}")]
    ActionNotPermitted { action: String, stage: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SplitsError {
    /// Returns the protocol error code for this error
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidStage(_)
            | Self::InvalidInput(_)
            | Self::ConfigError(_)
            | Self::SerializationError(_) => code::INVALID,
            Self::NoApplication => code::NOTFOUND,
            Self::ActionNotPermitted { .. } => code::UNAUTHORIZED,
            Self::IoError(_) => code::DEPENDENCY,
            Self::Internal(_) => code::INTERNAL,
        }
    }

    /// Returns the exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigError(_) => 2,
            Self::InvalidStage(_) | Self::InvalidInput(_) => 3,
            Self::NoApplication => 5,
            Self::ActionNotPermitted { .. } => 6,
            Self::IoError(_) => 7,
            Self::SerializationError(_) => 8,
            Self::Internal(_) => 9,
        }
    }
}

/// Protocol error codes as documented in the CLI
pub const ERROR_CODES: &[(&str, &str, &str)] = &[
    (
        code::CLI_ERROR,
        "Invalid CLI usage",
        "Run 'splits --help' for valid options",
    ),
    (
        code::NOTFOUND,
        "No application loaded",
        "Pass the application's current stage",
    ),
    (
        code::INVALID,
        "Invalid request payload",
        "Validate JSON syntax and ensure all required fields are present",
    ),
    (
        code::UNAUTHORIZED,
        "Action not permitted for this role at this stage",
        "Run splits permissions to inspect the allowed actions",
    ),
    (
        code::DEPENDENCY,
        "I/O failure",
        "Check stdin/stdout and config file permissions",
    ),
    (
        code::INTERNAL,
        "Unexpected internal failure",
        "Inspect logs and retry command",
    ),
];

/// Get error code details (description and fix) for a given error code
#[must_use]
pub fn get_error_info(error_code: &str) -> Option<(&'static str, &'static str)> {
    ERROR_CODES
        .iter()
        .find(|(code, _, _)| *code == error_code)
        .map(|(_, desc, fix)| (*desc, *fix))
}

pub type Result<T> = std::result::Result<T, SplitsError>;
