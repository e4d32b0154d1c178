#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::args::{
    actor_arg, error_envelope, json_value_type_name, optional_bool_arg, optional_str_arg,
    required_str_arg, stage_arg,
};
use super::{CommandResult, CommandSuccess, ProtocolRequest, RuntimeContext};
use serde_json::{json, Value};
use splits::protocol_envelope::ProtocolEnvelope;
use splits::{
    categorize_documents, code, plan_stage_update, resolve_permissions, ApplicationAction,
    ActorRole, ApplicationStage, Document, RecruiterId, SplitsError, StageRef,
};

pub(super) const COMMANDS: &[(&str, &str)] = &[
    ("permissions", "Resolve allowed actions for a stage and role"),
    ("next-stage", "Stage reached when an approval fires"),
    ("plan", "Authorize an action and build the stage update"),
    ("categorize", "Split documents into candidate and company buckets"),
    ("stages", "List pipeline stages"),
    ("batch", "Execute multiple commands"),
    ("?", "This help"),
];

pub(super) fn handle_help() -> CommandSuccess {
    let command_map = COMMANDS
        .iter()
        .map(|(cmd, description)| ((*cmd).to_string(), Value::String((*description).to_string())))
        .collect::<serde_json::Map<String, Value>>();

    CommandSuccess {
        data: json!({
            "n": "splits",
            "v": env!("CARGO_PKG_VERSION"),
            "commands": command_map,
            "roles": ActorRole::ALL,
            "actions": ApplicationAction::ALL,
            "batch_input": {
                "required": "ops",
                "example": "echo '{\"cmd\":\"batch\",\"ops\":[{\"cmd\":\"stages\"}]}' | splits",
            }
        }),
        next: "splits stages".to_string(),
    }
}

pub(super) fn handle_stages() -> CommandSuccess {
    let stages = ApplicationStage::ALL
        .iter()
        .map(|stage| {
            json!({
                "stage": stage,
                "label": stage.label(),
                "terminal": stage.is_terminal(),
            })
        })
        .collect::<Vec<_>>();

    CommandSuccess {
        data: json!({"stages": stages}),
        next: "splits permissions --stage screen --role recruiter".to_string(),
    }
}

pub(super) fn handle_permissions(request: &ProtocolRequest, ctx: RuntimeContext) -> CommandResult {
    let stage = stage_arg(request)?;
    let actor = actor_arg(request, ctx)?;
    let permissions = resolve_permissions(stage.as_ref(), &actor);

    let next = match (&stage, permissions.can_approve) {
        (Some(stage), true) => format!(
            "splits plan --stage {stage} --role {} --action approve",
            actor.role
        ),
        (Some(stage), false) => format!("splits next-stage --stage {stage}"),
        (None, _) => "splits stages".to_string(),
    };

    Ok(CommandSuccess {
        data: serde_json::to_value(&permissions)
            .map_err(|err| error_envelope(request, &SplitsError::SerializationError(err)))?,
        next,
    })
}

pub(super) fn handle_next_stage(request: &ProtocolRequest) -> CommandResult {
    let stage = StageRef::parse(required_str_arg(request, "stage")?);
    let recruiter = RecruiterId::from_optional(optional_str_arg(request, "candidate_recruiter_id")?);
    let move_to_offer = optional_bool_arg(request, "move_to_offer")?.unwrap_or(false);
    let next = stage.next_on_approve(recruiter.as_ref(), move_to_offer);

    Ok(CommandSuccess {
        data: json!({
            "from": stage,
            "to": next,
            "to_label": next.label(),
        }),
        next: format!("splits permissions --stage {next}"),
    })
}

pub(super) fn handle_plan(request: &ProtocolRequest, ctx: RuntimeContext) -> CommandResult {
    let stage = stage_arg(request)?;
    let actor = actor_arg(request, ctx)?;
    let action = required_str_arg(request, "action")?
        .parse::<ApplicationAction>()
        .map_err(|err| error_envelope(request, &err))?;
    let note = optional_str_arg(request, "note")?;

    let plan = plan_stage_update(stage.as_ref(), &actor, action, note)
        .map_err(|err| error_envelope(request, &err))?;

    let next = plan.to_stage.map_or_else(
        || "splits permissions".to_string(),
        |to| format!("splits permissions --stage {to}"),
    );

    Ok(CommandSuccess {
        data: json!({
            "plan": plan,
            "patch_body": plan.patch_body(),
        }),
        next,
    })
}

pub(super) fn handle_categorize(request: &ProtocolRequest) -> CommandResult {
    let raw = match request.args.get("documents") {
        Some(Value::Array(items)) => Value::Array(items.clone()),
        other => {
            return Err(Box::new(
                ProtocolEnvelope::error(
                    request.rid.clone(),
                    code::INVALID.to_string(),
                    format!(
                        "Field 'documents' must be an array, got {}",
                        other.map_or("nothing", json_value_type_name)
                    ),
                )
                .with_fix(
                    "Pass documents as an array of objects with a document_type field".to_string(),
                ),
            ))
        }
    };

    let documents = serde_json::from_value::<Vec<Document>>(raw)
        .map_err(|err| error_envelope(request, &SplitsError::SerializationError(err)))?;
    let categorized = categorize_documents(&documents);

    Ok(CommandSuccess {
        data: serde_json::to_value(&categorized)
            .map_err(|err| error_envelope(request, &SplitsError::SerializationError(err)))?,
        next: "splits stages".to_string(),
    })
}
