#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::{ProtocolRequest, RuntimeContext};
use serde_json::{json, Value};
use splits::protocol_envelope::ProtocolEnvelope;
use splits::{code, ActorContext, ActorRole, RecruiterId, SplitsError, StageRef};

const ROLE_FLAGS: [&str; 3] = ["is_recruiter", "is_company_user", "is_platform_admin"];

type ArgResult<T> = std::result::Result<T, Box<ProtocolEnvelope>>;

pub(super) const fn json_value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(super) fn error_envelope(request: &ProtocolRequest, error: &SplitsError) -> Box<ProtocolEnvelope> {
    Box::new(
        ProtocolEnvelope::from_error(request.rid.clone(), error).with_ctx(json!({"cmd": request.cmd})),
    )
}

fn invalid_field(request: &ProtocolRequest, field: &str, msg: String) -> Box<ProtocolEnvelope> {
    Box::new(
        ProtocolEnvelope::error(request.rid.clone(), code::INVALID.to_string(), msg)
            .with_fix(format!("Check the '{field}' field of the {} request", request.cmd))
            .with_ctx(json!({"cmd": request.cmd, "field": field})),
    )
}

pub(super) fn optional_str_arg<'a>(
    request: &'a ProtocolRequest,
    name: &str,
) -> ArgResult<Option<&'a str>> {
    match request.args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(other) => Err(invalid_field(
            request,
            name,
            format!(
                "Field '{name}' must be a string, got {}",
                json_value_type_name(other)
            ),
        )),
    }
}

pub(super) fn required_str_arg<'a>(request: &'a ProtocolRequest, name: &str) -> ArgResult<&'a str> {
    optional_str_arg(request, name)?
        .ok_or_else(|| invalid_field(request, name, format!("Missing required field: {name}")))
}

pub(super) fn optional_bool_arg(request: &ProtocolRequest, name: &str) -> ArgResult<Option<bool>> {
    match request.args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(other) => Err(invalid_field(
            request,
            name,
            format!(
                "Field '{name}' must be a bool, got {}",
                json_value_type_name(other)
            ),
        )),
    }
}

pub(super) fn stage_arg(request: &ProtocolRequest) -> ArgResult<Option<StageRef>> {
    optional_str_arg(request, "stage").map(|stage| stage.map(StageRef::parse))
}

/// Builds the actor from either `role` or the `is_*` flag triple.
pub(super) fn actor_arg(request: &ProtocolRequest, ctx: RuntimeContext) -> ArgResult<ActorContext> {
    let recruiter = RecruiterId::from_optional(optional_str_arg(request, "candidate_recruiter_id")?);
    let role = optional_str_arg(request, "role")?;
    let uses_flags = ROLE_FLAGS
        .iter()
        .any(|flag| request.args.contains_key(*flag));

    match (role, uses_flags) {
        (Some(_), true) => Err(invalid_field(
            request,
            "role",
            "Use either 'role' or the is_* flags, not both".to_string(),
        )),
        (Some(role), false) => role
            .parse::<ActorRole>()
            .map(|role| ActorContext::new(role, recruiter))
            .map_err(|err| error_envelope(request, &err)),
        (None, true) => {
            let is_recruiter = optional_bool_arg(request, "is_recruiter")?.unwrap_or(false);
            let is_company_user = optional_bool_arg(request, "is_company_user")?.unwrap_or(false);
            let is_platform_admin =
                optional_bool_arg(request, "is_platform_admin")?.unwrap_or(false);
            Ok(ActorContext::new(
                ActorRole::from_flags(is_recruiter, is_company_user, is_platform_admin),
                recruiter,
            ))
        }
        (None, false) => Ok(ActorContext::new(ctx.default_role, recruiter)),
    }
}
