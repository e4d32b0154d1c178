#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::StagePermissions;
use crate::domain::actor::ActorContext;
use crate::domain::stage::{ApplicationStage, StageRef};

pub const NO_APPLICATION_LABEL: &str = "Application";
pub const NO_APPLICATION_MESSAGE: &str = "Waiting for application data.";
pub const TERMINAL_FALLBACK_MESSAGE: &str = "No further actions available.";
const DEFAULT_WAITING_MESSAGE: &str = "Waiting for next step.";
const REJECT_APPLICATION: &str = "Reject Application";

#[allow(clippy::struct_excessive_bools)]
struct StageRule {
    can_approve: bool,
    can_reject: bool,
    can_request_prescreen: bool,
    can_request_changes: bool,
    can_move_to_offer: Option<bool>,
    approve_text: &'static str,
    reject_text: &'static str,
    waiting_message: &'static str,
}

impl StageRule {
    const fn gated(
        allowed: bool,
        approve_text: &'static str,
        reject_text: &'static str,
        waiting_message: &'static str,
    ) -> Self {
        Self {
            can_approve: allowed,
            can_reject: allowed,
            can_request_prescreen: false,
            can_request_changes: false,
            can_move_to_offer: None,
            approve_text,
            reject_text,
            waiting_message,
        }
    }

    const fn with_request_changes(mut self, allowed: bool) -> Self {
        self.can_request_changes = allowed;
        self
    }

    const fn with_request_prescreen(mut self, allowed: bool) -> Self {
        self.can_request_prescreen = allowed;
        self
    }

    const fn with_move_to_offer(mut self) -> Self {
        self.can_move_to_offer = Some(true);
        self
    }

    const fn none() -> Self {
        Self::gated(false, "Approve", "Reject", DEFAULT_WAITING_MESSAGE)
    }
}

/// Resolves the actions available to `actor` at `stage`.
///
/// `None` means no application is loaded. Unknown stage values resolve to
/// the most restrictive result and keep their raw value as the label.
#[must_use]
pub fn resolve_permissions(stage: Option<&StageRef>, actor: &ActorContext) -> StagePermissions {
    tracing::trace!(
        stage = stage.map(StageRef::as_str),
        role = actor.role.as_str(),
        has_recruiter_of_record = actor.has_recruiter_of_record(),
        "resolving stage permissions"
    );

    let Some(stage) = stage else {
        return StagePermissions::no_actions(NO_APPLICATION_LABEL, NO_APPLICATION_MESSAGE);
    };

    match stage {
        StageRef::Known(known) => resolve_stage_permissions(*known, actor),
        StageRef::Unknown(raw) => finish(raw.as_str(), &StageRule::none(), actor),
    }
}

#[must_use]
pub fn resolve_stage_permissions(stage: ApplicationStage, actor: &ActorContext) -> StagePermissions {
    if stage.is_terminal() {
        return StagePermissions::no_actions(stage.label(), terminal_waiting_message(stage));
    }

    finish(stage.label(), &active_stage_rule(stage, actor), actor)
}

fn finish(stage_label: &str, rule: &StageRule, actor: &ActorContext) -> StagePermissions {
    StagePermissions {
        can_approve: rule.can_approve,
        can_reject: rule.can_reject,
        can_add_note: rule.can_approve || rule.can_reject || actor.role.is_platform_admin(),
        can_request_prescreen: rule.can_request_prescreen,
        can_request_changes: rule.can_request_changes,
        approve_button_text: rule.approve_text.to_string(),
        reject_button_text: rule.reject_text.to_string(),
        stage_label: stage_label.to_string(),
        waiting_message: rule.waiting_message.to_string(),
        can_move_to_offer: rule.can_move_to_offer,
    }
}

const fn terminal_waiting_message(stage: ApplicationStage) -> &'static str {
    match stage {
        ApplicationStage::Hired => "Candidate has been hired.",
        ApplicationStage::Rejected => "Application was rejected.",
        ApplicationStage::Withdrawn => "Application was withdrawn.",
        ApplicationStage::Expired => "Application has expired.",
        _ => TERMINAL_FALLBACK_MESSAGE,
    }
}

fn active_stage_rule(stage: ApplicationStage, actor: &ActorContext) -> StageRule {
    let recruiter = actor.role.acts_as_recruiter();
    let company = actor.role.acts_as_company();

    match stage {
        ApplicationStage::Screen => StageRule::gated(
            recruiter || company,
            "Approve for Company Review",
            REJECT_APPLICATION,
            "Application is being screened.",
        )
        .with_request_changes(recruiter),
        ApplicationStage::Submitted => StageRule::gated(
            company,
            "Accept for Company Review",
            REJECT_APPLICATION,
            "Waiting for company to review the submission.",
        )
        .with_request_prescreen(company && !actor.has_recruiter_of_record()),
        ApplicationStage::CompanyReview => StageRule::gated(
            company,
            "Move to Interview",
            REJECT_APPLICATION,
            "Company is reviewing the application.",
        )
        .with_move_to_offer(),
        ApplicationStage::RecruiterReview => StageRule::gated(
            recruiter,
            "Approve for Company",
            "Decline to Represent",
            "Waiting for recruiter to review the application.",
        )
        .with_request_changes(recruiter),
        ApplicationStage::RecruiterProposed => StageRule::gated(
            recruiter,
            "Approve for Company Review",
            "Decline",
            "Waiting for recruiter to approve the proposal.",
        ),
        ApplicationStage::CompanyFeedback => {
            // Approve and reject share one predicate here.
            if actor.has_recruiter_of_record() {
                StageRule::gated(
                    recruiter,
                    "Approve & Continue",
                    REJECT_APPLICATION,
                    "Waiting for recruiter to respond to company feedback.",
                )
            } else {
                StageRule::gated(
                    company,
                    "Approve & Continue",
                    REJECT_APPLICATION,
                    "Waiting for company to act on feedback.",
                )
            }
        }
        ApplicationStage::Interview => StageRule::gated(
            company,
            "Extend Offer",
            REJECT_APPLICATION,
            "Candidate is interviewing.",
        ),
        ApplicationStage::Offer => StageRule::gated(
            company,
            "Mark as Hired",
            REJECT_APPLICATION,
            "Offer has been extended.",
        ),
        ApplicationStage::Draft
        | ApplicationStage::AiReview
        | ApplicationStage::AiReviewed
        | ApplicationStage::RecruiterRequest
        | ApplicationStage::Hired
        | ApplicationStage::Rejected
        | ApplicationStage::Withdrawn
        | ApplicationStage::Expired => StageRule::none(),
    }
}
