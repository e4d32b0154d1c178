#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use splits::protocol_envelope::ProtocolEnvelope;
use splits::SplitsError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    #[default]
    Json,
}

impl FromStr for OutputFormat {
    type Err = SplitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(SplitsError::InvalidInput(format!(
                "Unknown output format: {other}"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Renders an envelope for a single CLI command.
///
/// # Errors
/// Returns an error if the envelope cannot be serialized.
pub fn render_envelope(
    output: OutputFormat,
    envelope: &ProtocolEnvelope,
) -> Result<String, SplitsError> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string(envelope)?),
        OutputFormat::Text => match (&envelope.d, &envelope.err) {
            (_, Some(err)) => Ok(envelope.fix.as_ref().map_or_else(
                || format!("error [{}]: {}", err.code, err.msg),
                |fix| format!("error [{}]: {}\nfix: {fix}", err.code, err.msg),
            )),
            (Some(data), None) => Ok(serde_json::to_string_pretty(data)?),
            (None, None) => Ok(String::new()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{render_envelope, OutputFormat};
    use serde_json::json;
    use splits::protocol_envelope::ProtocolEnvelope;
    use splits::SplitsError;

    #[test]
    fn text_output_prints_payload_only() {
        let envelope = ProtocolEnvelope::success(None, json!({"to": "offer"}));
        let text = render_envelope(OutputFormat::Text, &envelope).unwrap_or_default();
        assert!(text.contains("\"to\": \"offer\""));
        assert!(!text.contains("\"ok\""));
    }

    #[test]
    fn text_output_shows_code_and_fix() {
        let envelope = ProtocolEnvelope::from_error(None, &SplitsError::NoApplication);
        let text = render_envelope(OutputFormat::Text, &envelope).unwrap_or_default();
        assert!(text.starts_with("error [NOTFOUND]: No application loaded"));
        assert!(text.contains("fix: "));
    }

    #[test]
    fn json_output_is_single_line_envelope() {
        let envelope = ProtocolEnvelope::success(Some("r".to_string()), json!({}));
        let text = render_envelope(OutputFormat::Json, &envelope).unwrap_or_default();
        assert!(!text.contains('\n'));
        assert!(text.contains("\"ok\":true"));
    }

    #[test]
    fn format_names_parse() {
        assert_eq!("text".parse::<OutputFormat>().ok(), Some(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
