#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::ProtocolRequest;
use itertools::Itertools;
use serde_json::json;
use splits::code;
use splits::protocol_envelope::ProtocolEnvelope;

const ACTOR_ARGS: &[&str] = &[
    "role",
    "is_recruiter",
    "is_company_user",
    "is_platform_admin",
    "candidate_recruiter_id",
];

fn allowed_command_args(cmd: &str) -> Option<Vec<&'static str>> {
    match cmd {
        "?" | "help" | "stages" => Some(Vec::new()),
        "permissions" => Some([&["stage"][..], ACTOR_ARGS].concat()),
        "plan" => Some([&["stage", "action", "note"][..], ACTOR_ARGS].concat()),
        "next-stage" => Some(vec!["stage", "candidate_recruiter_id", "move_to_offer"]),
        "categorize" => Some(vec!["documents"]),
        "batch" => Some(vec!["ops"]),
        _ => None,
    }
}

pub(super) fn validate_request_args(
    request: &ProtocolRequest,
) -> std::result::Result<(), Box<ProtocolEnvelope>> {
    if request.cmd.contains('\0') {
        return Err(Box::new(
            ProtocolEnvelope::error(
                request.rid.clone(),
                code::INVALID.to_string(),
                "Command name contains a null byte".to_string(),
            )
            .with_fix("Remove control characters from the cmd field".to_string()),
        ));
    }

    let Some(allowed) = allowed_command_args(request.cmd.as_str()) else {
        return Ok(());
    };
    let unknown = request
        .args
        .keys()
        .filter(|key| !allowed.iter().any(|name| *name == key.as_str()))
        .cloned()
        .collect::<Vec<_>>();

    if unknown.is_empty() {
        return Ok(());
    }

    let allowed = allowed.into_iter().sorted().dedup().collect::<Vec<_>>();

    Err(Box::new(
        ProtocolEnvelope::error(
            request.rid.clone(),
            code::INVALID.to_string(),
            format!(
                "Unknown field(s) for {}: {}",
                request.cmd,
                unknown.iter().join(", ")
            ),
        )
        .with_fix("Remove unknown fields or use documented command arguments".to_string())
        .with_ctx(json!({"cmd": request.cmd, "unknown": unknown, "allowed": allowed})),
    ))
}
