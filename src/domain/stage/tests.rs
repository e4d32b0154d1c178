#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

#[cfg(test)]
mod bdd_tests {
    use crate::domain::actor::RecruiterId;
    use crate::domain::stage::{next_stage_on_approve, ApplicationStage, StageRef};

    fn given_a_recruiter_of_record() -> RecruiterId {
        RecruiterId::new("rec-1")
    }

    #[test]
    fn when_company_review_moves_to_offer_then_next_is_offer() {
        assert_eq!(
            next_stage_on_approve(ApplicationStage::CompanyReview, None, true),
            ApplicationStage::Offer
        );
        assert_eq!(
            next_stage_on_approve(ApplicationStage::CompanyReview, None, false),
            ApplicationStage::Interview
        );
    }

    #[test]
    fn when_company_feedback_has_recruiter_then_returns_to_recruiter_review() {
        let recruiter = given_a_recruiter_of_record();
        assert_eq!(
            next_stage_on_approve(ApplicationStage::CompanyFeedback, Some(&recruiter), false),
            ApplicationStage::RecruiterReview
        );
        assert_eq!(
            next_stage_on_approve(ApplicationStage::CompanyFeedback, None, false),
            ApplicationStage::Interview
        );
    }

    #[test]
    fn when_stage_is_approved_then_follows_pipeline_table() {
        let expectations = [
            (ApplicationStage::Screen, ApplicationStage::CompanyReview),
            (ApplicationStage::Submitted, ApplicationStage::CompanyReview),
            (ApplicationStage::RecruiterReview, ApplicationStage::Submitted),
            (
                ApplicationStage::RecruiterProposed,
                ApplicationStage::CompanyReview,
            ),
            (ApplicationStage::Interview, ApplicationStage::Offer),
            (ApplicationStage::Offer, ApplicationStage::Hired),
        ];

        for (current, expected) in expectations {
            assert_eq!(next_stage_on_approve(current, None, false), expected);
        }
    }

    #[test]
    fn when_move_to_offer_set_outside_company_review_then_it_is_ignored() {
        assert_eq!(
            next_stage_on_approve(ApplicationStage::Interview, None, true),
            ApplicationStage::Offer
        );
        assert_eq!(
            next_stage_on_approve(ApplicationStage::Screen, None, true),
            ApplicationStage::CompanyReview
        );
    }

    // Unlisted stages, terminal ones included, keep the company_review fallback.
    #[test]
    fn when_stage_has_no_rule_then_falls_back_to_company_review() {
        let unlisted = [
            ApplicationStage::Draft,
            ApplicationStage::AiReview,
            ApplicationStage::AiReviewed,
            ApplicationStage::RecruiterRequest,
            ApplicationStage::Hired,
            ApplicationStage::Rejected,
            ApplicationStage::Withdrawn,
            ApplicationStage::Expired,
        ];

        for stage in unlisted {
            assert_eq!(
                next_stage_on_approve(stage, None, false),
                ApplicationStage::CompanyReview
            );
        }
        assert_eq!(
            StageRef::parse("phone_screen").next_on_approve(None, false),
            ApplicationStage::CompanyReview
        );
    }

    #[test]
    fn when_stage_is_terminal_then_is_terminal() {
        let terminal = ApplicationStage::ALL
            .into_iter()
            .filter(ApplicationStage::is_terminal)
            .collect::<Vec<_>>();
        assert_eq!(terminal, ApplicationStage::TERMINAL.to_vec());
        assert!(ApplicationStage::Screen.is_active());
    }

    #[test]
    fn when_stage_name_round_trips_then_matches_wire_value() {
        for stage in ApplicationStage::ALL {
            assert_eq!(stage.as_str().parse::<ApplicationStage>().ok(), Some(stage));
        }
        assert!("Screen".parse::<ApplicationStage>().is_err());
    }

    #[test]
    fn when_stage_serialized_then_uses_snake_case() {
        let json = serde_json::to_string(&ApplicationStage::CompanyReview).ok();
        assert_eq!(json.as_deref(), Some("\"company_review\""));
    }

    #[test]
    fn when_stage_labels_requested_then_every_stage_has_one() {
        assert_eq!(ApplicationStage::AiReview.label(), "AI Review");
        assert_eq!(ApplicationStage::CompanyReview.label(), "Company Review");
        assert!(ApplicationStage::ALL
            .iter()
            .all(|stage| !stage.label().is_empty()));
    }

    #[test]
    fn when_stage_is_unknown_then_label_is_raw_value() {
        let stage = StageRef::parse("background_check");
        assert_eq!(stage, StageRef::Unknown("background_check".to_string()));
        assert_eq!(stage.label(), "background_check");
        assert!(!stage.is_terminal());
        assert_eq!(stage.known(), None);
    }

    #[test]
    fn when_stage_ref_deserialized_then_known_values_are_typed() {
        let parsed: Result<Vec<StageRef>, _> =
            serde_json::from_str(r#"["offer","mystery"]"#);
        assert_eq!(
            parsed.ok(),
            Some(vec![
                StageRef::Known(ApplicationStage::Offer),
                StageRef::Unknown("mystery".to_string()),
            ])
        );
    }
}
