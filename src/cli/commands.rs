#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Help,
    Stages,
    Permissions {
        stage: Option<String>,
        role: Option<String>,
        recruiter_id: Option<String>,
    },
    NextStage {
        stage: String,
        recruiter_id: Option<String>,
        move_to_offer: Option<bool>,
    },
    Plan {
        stage: String,
        action: String,
        role: Option<String>,
        recruiter_id: Option<String>,
        note: Option<String>,
    },
    Categorize {
        documents: Value,
    },
    Json(String),
}

fn insert_some(args: &mut Map<String, Value>, key: &str, value: Option<impl Into<Value>>) {
    if let Some(value) = value {
        args.insert(key.to_string(), value.into());
    }
}

/// Renders a command as the protocol request line it stands for.
#[must_use]
pub fn cli_command_to_request(cmd: CliCommand) -> String {
    let (cmd_name, args) = match cmd {
        CliCommand::Json(raw) => return raw,
        CliCommand::Help => ("?", Map::new()),
        CliCommand::Stages => ("stages", Map::new()),
        CliCommand::Permissions {
            stage,
            role,
            recruiter_id,
        } => {
            let mut args = Map::new();
            insert_some(&mut args, "stage", stage);
            insert_some(&mut args, "role", role);
            insert_some(&mut args, "candidate_recruiter_id", recruiter_id);
            ("permissions", args)
        }
        CliCommand::NextStage {
            stage,
            recruiter_id,
            move_to_offer,
        } => {
            let mut args = Map::new();
            args.insert("stage".to_string(), json!(stage));
            insert_some(&mut args, "candidate_recruiter_id", recruiter_id);
            insert_some(&mut args, "move_to_offer", move_to_offer);
            ("next-stage", args)
        }
        CliCommand::Plan {
            stage,
            action,
            role,
            recruiter_id,
            note,
        } => {
            let mut args = Map::new();
            args.insert("stage".to_string(), json!(stage));
            args.insert("action".to_string(), json!(action));
            insert_some(&mut args, "role", role);
            insert_some(&mut args, "candidate_recruiter_id", recruiter_id);
            insert_some(&mut args, "note", note);
            ("plan", args)
        }
        CliCommand::Categorize { documents } => {
            let mut args = Map::new();
            args.insert("documents".to_string(), documents);
            ("categorize", args)
        }
    };

    let mut request = Map::new();
    request.insert("cmd".to_string(), json!(cmd_name));
    request.extend(args);
    Value::Object(request).to_string()
}
