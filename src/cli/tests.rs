#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

#[cfg(test)]
mod bdd_tests {
    use crate::cli::{
        cli_command_to_request, extract_global_flags, parse_cli_args, suggest_commands,
        CliAction, CliCommand, CliError,
    };
    use serde_json::Value;
    use std::path::PathBuf;

    fn given_cli_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| (*s).to_string()).collect()
    }

    fn when_parsed(args: &[&str]) -> Result<CliAction, CliError> {
        parse_cli_args(&given_cli_args(args))
    }

    fn request_of(args: &[&str]) -> Value {
        match when_parsed(args) {
            Ok(CliAction::Command(cmd)) => {
                serde_json::from_str(&cli_command_to_request(cmd)).unwrap_or_default()
            }
            _ => Value::Null,
        }
    }

    #[test]
    fn when_no_args_then_run_protocol() {
        assert!(matches!(when_parsed(&[]), Ok(CliAction::RunProtocol)));
    }

    #[test]
    fn when_help_flag_then_show_help() {
        assert!(matches!(when_parsed(&["-h"]), Ok(CliAction::ShowHelp)));
        assert!(matches!(
            when_parsed(&["plan", "--help"]),
            Ok(CliAction::ShowHelp)
        ));
    }

    #[test]
    fn when_version_flag_then_show_version() {
        assert!(matches!(when_parsed(&["-v"]), Ok(CliAction::ShowVersion)));
    }

    #[test]
    fn when_permissions_command_then_request_carries_flags() {
        let request = request_of(&[
            "permissions",
            "--stage",
            "company_feedback",
            "--role",
            "recruiter",
            "--recruiter-id",
            "rec-123",
        ]);

        assert_eq!(request["cmd"], "permissions");
        assert_eq!(request["stage"], "company_feedback");
        assert_eq!(request["role"], "recruiter");
        assert_eq!(request["candidate_recruiter_id"], "rec-123");
    }

    #[test]
    fn when_permissions_without_stage_then_stage_omitted() {
        let request = request_of(&["permissions"]);
        assert_eq!(request["cmd"], "permissions");
        assert!(request.get("stage").is_none());
    }

    #[test]
    fn when_next_stage_with_bare_bool_flag_then_true() {
        let request = request_of(&["next-stage", "--stage", "company_review", "--move-to-offer"]);
        assert_eq!(request["cmd"], "next-stage");
        assert_eq!(request["move_to_offer"], true);
    }

    #[test]
    fn when_next_stage_missing_stage_then_error() {
        assert_eq!(
            when_parsed(&["next-stage"]).err(),
            Some(CliError::MissingRequiredArg {
                arg: "stage".to_string()
            })
        );
    }

    #[test]
    fn when_plan_command_then_action_and_note_forwarded() {
        let request = request_of(&[
            "plan", "--stage", "offer", "--action", "reject", "--role", "company_user", "--note",
            "declined",
        ]);
        assert_eq!(request["cmd"], "plan");
        assert_eq!(request["action"], "reject");
        assert_eq!(request["note"], "declined");
    }

    #[test]
    fn when_unknown_flag_then_error_names_it() {
        assert_eq!(
            when_parsed(&["stages", "--verbose"]).err(),
            Some(CliError::UnknownFlag {
                flag: "--verbose".to_string()
            })
        );
    }

    #[test]
    fn when_categorize_documents_not_json_then_invalid_value() {
        assert!(matches!(
            when_parsed(&["categorize", "--documents", "[oops"]),
            Err(CliError::InvalidArgValue { .. })
        ));

        let request = request_of(&["categorize", "--documents", r#"[{"document_type":"nda"}]"#]);
        assert_eq!(request["documents"][0]["document_type"], "nda");
    }

    #[test]
    fn when_json_flag_then_raw_request_passes_through() {
        let raw = r#"{"cmd":"stages","rid":"7"}"#;
        let action = when_parsed(&["--json", raw]);
        assert!(matches!(
            action,
            Ok(CliAction::Command(CliCommand::Json(ref line))) if line == raw
        ));
    }

    #[test]
    fn when_unknown_command_then_suggestion_available() {
        assert_eq!(
            when_parsed(&["permisions"]).err(),
            Some(CliError::UnknownCommand {
                cmd: "permisions".to_string()
            })
        );
        assert_eq!(suggest_commands("permisions"), vec!["permissions".to_string()]);
        assert!(suggest_commands("zzzzzzzzzzzz").is_empty());
    }

    #[test]
    fn when_global_flags_present_then_extracted_anywhere() {
        let flags = extract_global_flags(&given_cli_args(&[
            "stages",
            "--config",
            "custom.toml",
            "--output",
            "text",
        ]));
        let flags = flags.ok().unwrap_or_default();

        assert_eq!(flags.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(flags.output.as_deref(), Some("text"));
        assert_eq!(flags.rest, vec!["stages".to_string()]);
    }

    #[test]
    fn when_global_flag_missing_value_then_error() {
        assert_eq!(
            extract_global_flags(&given_cli_args(&["--config"])).err(),
            Some(CliError::MissingRequiredArg {
                arg: "config".to_string()
            })
        );
    }
}
