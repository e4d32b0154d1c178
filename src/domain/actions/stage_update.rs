#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::ApplicationAction;
use crate::domain::actor::ActorContext;
use crate::domain::permissions::resolve_permissions;
use crate::domain::stage::{ApplicationStage, StageRef};
use crate::error::{Result, SplitsError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Stage change the portal sends to the applications API after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageUpdatePlan {
    pub from_stage: StageRef,
    pub to_stage: Option<ApplicationStage>,
    pub action: ApplicationAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl StageUpdatePlan {
    #[must_use]
    pub const fn changes_stage(&self) -> bool {
        self.to_stage.is_some()
    }

    /// Body for `PATCH /applications/{id}`.
    #[must_use]
    pub fn patch_body(&self) -> Value {
        let mut body = json!({});
        if let Some(stage) = self.to_stage {
            body["stage"] = json!(stage);
        }
        if let Some(note) = &self.note {
            body["notes"] = json!(note);
        }
        body
    }
}

/// Checks `action` against the resolved permissions and works out the
/// resulting stage change.
///
/// # Errors
/// - `SplitsError::NoApplication` when no stage is loaded.
/// - `SplitsError::ActionNotPermitted` when the actor lacks the capability.
/// - `SplitsError::InvalidInput` when the action needs a note and none was given.
pub fn plan_stage_update(
    stage: Option<&StageRef>,
    actor: &ActorContext,
    action: ApplicationAction,
    note: Option<&str>,
) -> Result<StageUpdatePlan> {
    let stage = stage.ok_or(SplitsError::NoApplication)?;
    let permissions = resolve_permissions(Some(stage), actor);

    if !action.is_permitted_by(&permissions) {
        tracing::warn!(
            stage = stage.as_str(),
            role = actor.role.as_str(),
            action = action.as_str(),
            "action denied"
        );
        return Err(SplitsError::ActionNotPermitted {
            action: action.as_str().to_string(),
            stage: stage.as_str().to_string(),
        });
    }

    let note = note
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string);
    if action.requires_note() && note.is_none() {
        return Err(SplitsError::InvalidInput(format!(
            "{action} requires a non-empty note"
        )));
    }

    let recruiter = actor.recruiter_of_record();
    let to_stage = action.changes_stage().then(|| match action {
        ApplicationAction::Reject => ApplicationStage::Rejected,
        ApplicationAction::MoveToOffer => stage.next_on_approve(recruiter, true),
        _ => stage.next_on_approve(recruiter, false),
    });

    tracing::debug!(
        from = stage.as_str(),
        to = to_stage.map(|next| next.as_str()),
        action = action.as_str(),
        "planned stage update"
    );

    Ok(StageUpdatePlan {
        from_stage: stage.clone(),
        to_stage,
        action,
        note,
    })
}
