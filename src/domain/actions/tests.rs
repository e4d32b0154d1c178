#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

#[cfg(test)]
mod bdd_tests {
    use crate::domain::actions::{plan_stage_update, ApplicationAction, StageUpdatePlan};
    use crate::domain::actor::{ActorContext, ActorRole, RecruiterId};
    use crate::domain::stage::{ApplicationStage, StageRef};
    use crate::error::{Result, SplitsError};
    use serde_json::json;

    fn given_actor(role: ActorRole, recruiter_of_record: Option<&str>) -> ActorContext {
        ActorContext::new(role, recruiter_of_record.map(RecruiterId::new))
    }

    fn when_planned(
        stage: ApplicationStage,
        actor: &ActorContext,
        action: ApplicationAction,
        note: Option<&str>,
    ) -> Result<StageUpdatePlan> {
        plan_stage_update(Some(&StageRef::Known(stage)), actor, action, note)
    }

    #[test]
    fn when_recruiter_approves_proposal_then_moves_to_company_review() {
        let recruiter = given_actor(ActorRole::Recruiter, None);
        let plan = when_planned(
            ApplicationStage::RecruiterProposed,
            &recruiter,
            ApplicationAction::Approve,
            Some("strong fit"),
        );

        let plan = plan.ok();
        assert_eq!(
            plan.as_ref().and_then(|p| p.to_stage),
            Some(ApplicationStage::CompanyReview)
        );
        assert_eq!(
            plan.map(|p| p.patch_body()),
            Some(json!({"stage": "company_review", "notes": "strong fit"}))
        );
    }

    #[test]
    fn when_company_moves_to_offer_then_skips_interview() {
        let company = given_actor(ActorRole::CompanyUser, None);
        let plan = when_planned(
            ApplicationStage::CompanyReview,
            &company,
            ApplicationAction::MoveToOffer,
            None,
        );
        assert_eq!(plan.ok().and_then(|p| p.to_stage), Some(ApplicationStage::Offer));
    }

    #[test]
    fn when_move_to_offer_outside_company_review_then_denied() {
        let company = given_actor(ActorRole::CompanyUser, None);
        let plan = when_planned(
            ApplicationStage::Interview,
            &company,
            ApplicationAction::MoveToOffer,
            None,
        );
        assert!(matches!(plan, Err(SplitsError::ActionNotPermitted { .. })));
    }

    #[test]
    fn when_reject_then_targets_rejected() {
        let company = given_actor(ActorRole::CompanyUser, None);
        let plan = when_planned(ApplicationStage::Offer, &company, ApplicationAction::Reject, None);
        let plan = plan.ok();
        assert_eq!(
            plan.as_ref().and_then(|p| p.to_stage),
            Some(ApplicationStage::Rejected)
        );
        assert_eq!(plan.map(|p| p.patch_body()), Some(json!({"stage": "rejected"})));
    }

    #[test]
    fn when_capability_missing_then_action_not_permitted() {
        let recruiter = given_actor(ActorRole::Recruiter, None);
        let plan = when_planned(
            ApplicationStage::Offer,
            &recruiter,
            ApplicationAction::Approve,
            None,
        );

        let err = plan.err();
        assert!(matches!(err, Some(SplitsError::ActionNotPermitted { .. })));
        assert_eq!(
            err.map(|e| e.to_string()),
            Some("Action approve is not permitted at stage offer".to_string())
        );
    }

    #[test]
    fn when_terminal_stage_then_every_action_denied_even_for_admin() {
        let admin = given_actor(ActorRole::PlatformAdmin, None);
        for (stage, action) in
            itertools::iproduct!(ApplicationStage::TERMINAL, ApplicationAction::ALL)
        {
            assert!(when_planned(stage, &admin, action, Some("note")).is_err());
        }
    }

    #[test]
    fn when_note_required_but_blank_then_invalid_input() {
        let admin = given_actor(ActorRole::PlatformAdmin, None);
        let plan = when_planned(
            ApplicationStage::Screen,
            &admin,
            ApplicationAction::AddNote,
            Some("   "),
        );
        assert!(matches!(plan, Err(SplitsError::InvalidInput(_))));
    }

    #[test]
    fn when_note_added_then_stage_unchanged() {
        let admin = given_actor(ActorRole::PlatformAdmin, None);
        let plan = when_planned(
            ApplicationStage::AiReview,
            &admin,
            ApplicationAction::AddNote,
            Some("checked references"),
        )
        .ok();

        assert_eq!(plan.as_ref().map(StageUpdatePlan::changes_stage), Some(false));
        assert_eq!(
            plan.map(|p| p.patch_body()),
            Some(json!({"notes": "checked references"}))
        );
    }

    #[test]
    fn when_company_requests_prescreen_then_only_without_recruiter() {
        let unrepresented = given_actor(ActorRole::CompanyUser, None);
        let represented = given_actor(ActorRole::CompanyUser, Some("rec-7"));

        assert!(when_planned(
            ApplicationStage::Submitted,
            &unrepresented,
            ApplicationAction::RequestPrescreen,
            None
        )
        .is_ok());
        assert!(when_planned(
            ApplicationStage::Submitted,
            &represented,
            ApplicationAction::RequestPrescreen,
            None
        )
        .is_err());
    }

    #[test]
    fn when_company_feedback_approved_by_recruiter_then_back_to_recruiter_review() {
        let recruiter = given_actor(ActorRole::Recruiter, Some("rec-1"));
        let plan = when_planned(
            ApplicationStage::CompanyFeedback,
            &recruiter,
            ApplicationAction::Approve,
            None,
        );
        assert_eq!(
            plan.ok().and_then(|p| p.to_stage),
            Some(ApplicationStage::RecruiterReview)
        );
    }

    #[test]
    fn when_no_application_then_cannot_plan() {
        let admin = given_actor(ActorRole::PlatformAdmin, None);
        let plan = plan_stage_update(None, &admin, ApplicationAction::AddNote, Some("x"));
        assert!(matches!(plan, Err(SplitsError::NoApplication)));
    }

    #[test]
    fn when_planned_then_only_stage_changing_actions_carry_a_target() {
        let admin = given_actor(ActorRole::PlatformAdmin, None);
        let permitted = [
            ApplicationAction::Approve,
            ApplicationAction::MoveToOffer,
            ApplicationAction::Reject,
            ApplicationAction::AddNote,
        ];
        for action in permitted {
            let plan = when_planned(ApplicationStage::CompanyReview, &admin, action, Some("ok"));
            assert_eq!(
                plan.as_ref().map(StageUpdatePlan::changes_stage).ok(),
                Some(action.changes_stage()),
                "{action}"
            );
        }
    }

    #[test]
    fn when_action_names_parse_then_match_wire_values() {
        for action in ApplicationAction::ALL {
            assert_eq!(action.as_str().parse::<ApplicationAction>().ok(), Some(action));
        }
        assert!("promote".parse::<ApplicationAction>().is_err());
    }
}
