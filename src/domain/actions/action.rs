#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::domain::permissions::StagePermissions;
use crate::error::SplitsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A control the portal can render for an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationAction {
    Approve,
    MoveToOffer,
    Reject,
    AddNote,
    RequestPrescreen,
    RequestChanges,
}

impl ApplicationAction {
    pub const ALL: [Self; 6] = [
        Self::Approve,
        Self::MoveToOffer,
        Self::Reject,
        Self::AddNote,
        Self::RequestPrescreen,
        Self::RequestChanges,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::MoveToOffer => "move_to_offer",
            Self::Reject => "reject",
            Self::AddNote => "add_note",
            Self::RequestPrescreen => "request_prescreen",
            Self::RequestChanges => "request_changes",
        }
    }

    #[must_use]
    pub fn is_permitted_by(&self, permissions: &StagePermissions) -> bool {
        match self {
            Self::Approve => permissions.can_approve,
            Self::MoveToOffer => permissions.can_approve && permissions.can_move_to_offer(),
            Self::Reject => permissions.can_reject,
            Self::AddNote => permissions.can_add_note,
            Self::RequestPrescreen => permissions.can_request_prescreen,
            Self::RequestChanges => permissions.can_request_changes,
        }
    }

    #[must_use]
    pub const fn requires_note(&self) -> bool {
        matches!(self, Self::AddNote | Self::RequestChanges)
    }

    #[must_use]
    pub const fn changes_stage(&self) -> bool {
        matches!(self, Self::Approve | Self::MoveToOffer | Self::Reject)
    }
}

impl fmt::Display for ApplicationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationAction {
    type Err = SplitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| SplitsError::InvalidInput(format!("Unknown action: {s}")))
    }
}
