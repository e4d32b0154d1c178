use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub envelopes: Vec<Value>,
    pub exit_code: Option<i32>,
}

impl ScenarioResult {
    pub fn first(&self) -> Result<&Value, String> {
        self.envelopes
            .first()
            .ok_or_else(|| "expected at least one response envelope".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ProtocolScenarioHarness {
    binary_path: PathBuf,
}

impl ProtocolScenarioHarness {
    #[must_use]
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(assert_cmd::cargo::cargo_bin!("splits")),
        }
    }

    #[must_use]
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.binary_path);
        command
            .env_remove("SPLITS_OUTPUT")
            .env_remove("SPLITS_DEFAULT_ROLE")
            .env_remove("SPLITS_LOG");
        command
    }

    /// Feeds `input` on stdin and collects one envelope per stdout line.
    pub fn run_protocol(&self, input: &str) -> Result<ScenarioResult, String> {
        let output = self
            .command()
            .write_stdin(format!("{input}\n"))
            .output()
            .map_err(|err| format!("failed to run splits: {err}"))?;

        let envelopes = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str::<Value>(line)
                    .map_err(|err| format!("expected JSON response envelope, got '{line}': {err}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ScenarioResult {
            envelopes,
            exit_code: output.status.code(),
        })
    }
}

impl Default for ProtocolScenarioHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn assert_protocol_envelope(output: &Value) -> Result<(), String> {
    match (output.get("ok"), output.get("t"), output.get("ms")) {
        (Some(_), Some(timestamp), Some(duration))
            if timestamp.is_number() && duration.is_number() =>
        {
            Ok(())
        }
        _ => Err(format!(
            "missing or invalid protocol envelope fields in response: {output}"
        )),
    }
}
