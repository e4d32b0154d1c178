#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// What the caller may do with an application at its current stage.
///
/// Advisory only: the backend enforces its own authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct StagePermissions {
    pub can_approve: bool,
    pub can_reject: bool,
    pub can_add_note: bool,
    pub can_request_prescreen: bool,
    pub can_request_changes: bool,
    pub approve_button_text: String,
    pub reject_button_text: String,
    pub stage_label: String,
    pub waiting_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_move_to_offer: Option<bool>,
}

impl StagePermissions {
    /// Result with every capability denied and default button labels.
    #[must_use]
    pub fn no_actions(stage_label: impl Into<String>, waiting_message: impl Into<String>) -> Self {
        Self {
            can_approve: false,
            can_reject: false,
            can_add_note: false,
            can_request_prescreen: false,
            can_request_changes: false,
            approve_button_text: "Approve".to_string(),
            reject_button_text: "Reject".to_string(),
            stage_label: stage_label.into(),
            waiting_message: waiting_message.into(),
            can_move_to_offer: None,
        }
    }

    #[must_use]
    pub const fn has_any_action(&self) -> bool {
        self.can_approve
            || self.can_reject
            || self.can_add_note
            || self.can_request_prescreen
            || self.can_request_changes
    }

    #[must_use]
    pub fn can_move_to_offer(&self) -> bool {
        self.can_move_to_offer.unwrap_or(false)
    }
}
