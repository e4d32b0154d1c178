#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::{execute_request_no_batch, CommandResult, CommandSuccess, ProtocolRequest, RuntimeContext};
use serde_json::{json, Value};
use splits::code;
use splits::protocol_envelope::ProtocolEnvelope;

#[derive(Debug, Default)]
struct BatchAcc {
    pass: usize,
    fail: usize,
    items: Vec<Value>,
}

impl BatchAcc {
    fn push(mut self, ok: bool, item: Value) -> Self {
        if ok {
            self.pass += 1;
        } else {
            self.fail += 1;
        }
        self.items.push(item);
        self
    }
}

/// Runs every op independently; one failing op does not stop the rest.
pub(super) fn handle_batch(request: &ProtocolRequest, ctx: RuntimeContext) -> CommandResult {
    let ops = request
        .args
        .get("ops")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            Box::new(
                ProtocolEnvelope::error(
                    request.rid.clone(),
                    code::INVALID.to_string(),
                    "Missing ops array".to_string(),
                )
                .with_fix(
                    "Add 'ops' array to batch request. Example: echo '{\"cmd\":\"batch\",\"ops\":[{\"cmd\":\"stages\"}]}' | splits"
                        .to_string(),
                )
                .with_ctx(json!({"ops": "required"})),
            )
        })?;

    if ops.is_empty() {
        return Err(Box::new(
            ProtocolEnvelope::error(
                request.rid.clone(),
                code::INVALID.to_string(),
                "Batch ops array cannot be empty".to_string(),
            )
            .with_fix("Provide at least one operation in the ops array".to_string()),
        ));
    }

    let acc = ops
        .iter()
        .enumerate()
        .fold(BatchAcc::default(), |acc, (idx, op)| {
            let seq = idx + 1;
            match serde_json::from_value::<ProtocolRequest>(op.clone()) {
                Ok(sub_request) => match execute_request_no_batch(&sub_request, ctx) {
                    Ok(success) => acc.push(
                        true,
                        json!({"seq": seq, "cmd": sub_request.cmd, "ok": true, "d": success.data}),
                    ),
                    Err(failure) => acc.push(
                        false,
                        json!({"seq": seq, "cmd": sub_request.cmd, "ok": false, "err": failure.err}),
                    ),
                },
                Err(err) => acc.push(
                    false,
                    json!({
                        "seq": seq,
                        "ok": false,
                        "err": {"code": code::INVALID, "msg": format!("Invalid batch item {idx}: {err}")},
                    }),
                ),
            }
        });

    Ok(CommandSuccess {
        data: json!({
            "items": acc.items,
            "summary": {
                "total": acc.pass + acc.fail,
                "pass": acc.pass,
                "fail": acc.fail,
            }
        }),
        next: "splits ?".to_string(),
    })
}
