#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod args;
mod batch;
mod handlers;
mod validation;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use splits::protocol_envelope::ProtocolEnvelope;
use splits::{code, ActorRole, SplitsError};
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProtocolRequest {
    pub cmd: String,
    pub rid: Option<String>,
    #[serde(flatten)]
    pub args: Map<String, Value>,
}

/// Settings shared by every request of one process.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeContext {
    pub default_role: ActorRole,
}

pub struct CommandSuccess {
    pub data: Value,
    pub next: String,
}

pub type CommandResult = std::result::Result<CommandSuccess, Box<ProtocolEnvelope>>;

/// Reads one request per stdin line and answers each with one envelope.
///
/// # Errors
/// Returns an error on stdin/stdout failure, or after the input is drained
/// if any request failed.
pub async fn run_protocol_loop(ctx: RuntimeContext) -> std::result::Result<(), SplitsError> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut processed = 0_usize;
    let mut failed = 0_usize;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        processed += 1;
        let envelope = handle_line(&line, ctx);
        if !envelope.ok {
            failed += 1;
        }
        write_envelope(&envelope).await?;
    }

    if processed == 0 {
        write_envelope(&no_input_envelope()).await?;
        return Err(SplitsError::InvalidInput("No input received on stdin".to_string()));
    }

    if failed > 0 {
        tracing::warn!(processed, failed, "protocol requests failed");
        return Err(SplitsError::Internal(format!(
            "{failed} of {processed} request(s) failed"
        )));
    }

    Ok(())
}

fn no_input_envelope() -> ProtocolEnvelope {
    ProtocolEnvelope::error(
        None,
        code::INVALID.to_string(),
        "No input received on stdin".to_string(),
    )
    .with_fix(
        "Provide one JSON command per line. Example: echo '{\"cmd\":\"stages\"}' | splits"
            .to_string(),
    )
    .with_ctx(json!({"stdin": "empty"}))
    .with_ms(0)
}

/// Writes one envelope as a single JSON line.
///
/// # Errors
/// Returns an error if serialization or the stdout write fails.
pub async fn write_envelope(envelope: &ProtocolEnvelope) -> std::result::Result<(), SplitsError> {
    let mut stdout = tokio::io::stdout();
    let response_text = serde_json::to_string(envelope)?;
    stdout.write_all(response_text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await.map_err(SplitsError::IoError)
}

#[must_use]
pub fn handle_line(line: &str, ctx: RuntimeContext) -> ProtocolEnvelope {
    let started = Instant::now();
    let envelope = match serde_json::from_str::<ProtocolRequest>(line) {
        Ok(request) => {
            let rid = request.rid.clone();
            tracing::debug!(cmd = %request.cmd, rid = ?rid, "protocol request");
            match execute_request(&request, ctx) {
                Ok(success) => ProtocolEnvelope::success(rid, success.data).with_next(success.next),
                Err(failure) => *failure,
            }
        }
        Err(err) => ProtocolEnvelope::error(
            parse_rid(line),
            code::INVALID.to_string(),
            format!("Invalid request JSON: {err}"),
        )
        .with_fix(
            "Ensure request is valid JSON with a 'cmd' field. Example: echo '{\"cmd\":\"stages\"}' | splits"
                .to_string(),
        )
        .with_ctx(json!({"line": line})),
    };

    envelope.with_ms(i64::try_from(started.elapsed().as_millis()).unwrap_or(i64::MAX))
}

fn parse_rid(line: &str) -> Option<String> {
    serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|value| value.get("rid").and_then(Value::as_str).map(str::to_string))
}

pub(crate) fn execute_request(request: &ProtocolRequest, ctx: RuntimeContext) -> CommandResult {
    validation::validate_request_args(request)?;

    match request.cmd.as_str() {
        "batch" => batch::handle_batch(request, ctx),
        _ => dispatch_request(request, ctx),
    }
}

/// Entry point for batch items: same validation, no nesting.
pub(crate) fn execute_request_no_batch(
    request: &ProtocolRequest,
    ctx: RuntimeContext,
) -> CommandResult {
    validation::validate_request_args(request)?;
    dispatch_request(request, ctx)
}

fn dispatch_request(request: &ProtocolRequest, ctx: RuntimeContext) -> CommandResult {
    match request.cmd.as_str() {
        "?" | "help" => Ok(handlers::handle_help()),
        "stages" => Ok(handlers::handle_stages()),
        "permissions" => handlers::handle_permissions(request, ctx),
        "next-stage" => handlers::handle_next_stage(request),
        "plan" => handlers::handle_plan(request, ctx),
        "categorize" => handlers::handle_categorize(request),
        "batch" => Err(Box::new(
            ProtocolEnvelope::error(
                request.rid.clone(),
                code::INVALID.to_string(),
                "Nested batch is not supported".to_string(),
            )
            .with_fix("Split nested batch into top-level ops".to_string()),
        )),
        other => Err(Box::new(
            ProtocolEnvelope::error(
                request.rid.clone(),
                code::INVALID.to_string(),
                format!("Unknown command: {other}"),
            )
            .with_fix(
                "Use a valid command: permissions, next-stage, plan, categorize, stages, batch, or ?/help for help"
                    .to_string(),
            )
            .with_ctx(json!({"cmd": other})),
        )),
    }
}
