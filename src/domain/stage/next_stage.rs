#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::{ApplicationStage, StageRef};
use crate::domain::actor::RecruiterId;

/// Stage an application moves to when an approve action fires.
///
/// Role gating is not repeated here: callers check `can_approve` first.
/// Stages without an explicit rule, terminal stages included, fall back to
/// `company_review`.
#[must_use]
pub const fn next_stage_on_approve(
    current: ApplicationStage,
    candidate_recruiter_id: Option<&RecruiterId>,
    move_to_offer: bool,
) -> ApplicationStage {
    match current {
        ApplicationStage::Screen
        | ApplicationStage::Submitted
        | ApplicationStage::RecruiterProposed => ApplicationStage::CompanyReview,
        ApplicationStage::CompanyReview => {
            if move_to_offer {
                ApplicationStage::Offer
            } else {
                ApplicationStage::Interview
            }
        }
        ApplicationStage::RecruiterReview => ApplicationStage::Submitted,
        ApplicationStage::CompanyFeedback => {
            if candidate_recruiter_id.is_some() {
                ApplicationStage::RecruiterReview
            } else {
                ApplicationStage::Interview
            }
        }
        ApplicationStage::Interview => ApplicationStage::Offer,
        ApplicationStage::Offer => ApplicationStage::Hired,
        ApplicationStage::Draft
        | ApplicationStage::AiReview
        | ApplicationStage::AiReviewed
        | ApplicationStage::RecruiterRequest
        | ApplicationStage::Hired
        | ApplicationStage::Rejected
        | ApplicationStage::Withdrawn
        | ApplicationStage::Expired => ApplicationStage::CompanyReview,
    }
}

impl StageRef {
    #[must_use]
    pub const fn next_on_approve(
        &self,
        candidate_recruiter_id: Option<&RecruiterId>,
        move_to_offer: bool,
    ) -> ApplicationStage {
        match self.known() {
            Some(stage) => next_stage_on_approve(stage, candidate_recruiter_id, move_to_offer),
            None => ApplicationStage::CompanyReview,
        }
    }
}
