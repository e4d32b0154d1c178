#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::ApplicationStage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stage as reported by the backend.
///
/// Stage values this build does not know about are kept verbatim rather than
/// rejected, so a newer backend can introduce stages without breaking callers.
/// Unknown stages resolve to the most restrictive permission set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StageRef {
    Known(ApplicationStage),
    Unknown(String),
}

impl StageRef {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        ApplicationStage::try_from(raw).map_or_else(|_| Self::Unknown(raw.to_string()), Self::Known)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(stage) => stage.as_str(),
            Self::Unknown(raw) => raw,
        }
    }

    /// Display label; unknown stages fall back to the raw value.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Known(stage) => stage.label(),
            Self::Unknown(raw) => raw,
        }
    }

    #[must_use]
    pub const fn known(&self) -> Option<ApplicationStage> {
        match self {
            Self::Known(stage) => Some(*stage),
            Self::Unknown(_) => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        match self {
            Self::Known(stage) => stage.is_terminal(),
            Self::Unknown(_) => false,
        }
    }
}

impl From<ApplicationStage> for StageRef {
    fn from(stage: ApplicationStage) -> Self {
        Self::Known(stage)
    }
}

impl From<String> for StageRef {
    fn from(raw: String) -> Self {
        match ApplicationStage::try_from(raw.as_str()) {
            Ok(stage) => Self::Known(stage),
            Err(_) => Self::Unknown(raw),
        }
    }
}

impl From<&str> for StageRef {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<StageRef> for String {
    fn from(stage: StageRef) -> Self {
        match stage {
            StageRef::Known(stage) => stage.as_str().to_string(),
            StageRef::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for StageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
