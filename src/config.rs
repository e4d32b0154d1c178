#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::output::OutputFormat;
use splits::{ActorRole, Result, SplitsError};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = ".splits/config.toml";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: OutputFormat,
    pub log_filter: String,
    pub default_role: ActorRole,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Json,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            default_role: ActorRole::Other,
        }
    }
}

/// Loads the config file if present, then applies environment overrides.
///
/// # Errors
/// Returns `SplitsError::ConfigError` if the file exists but cannot be read
/// or holds an invalid value.
pub async fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = if config_path.exists() {
        let content = tokio::fs::read_to_string(&config_path)
            .await
            .map_err(|e| SplitsError::ConfigError(format!("Failed to read config: {e}")))?;
        parse_config_content(&content)?
    } else if explicit {
        return Err(SplitsError::ConfigError(format!(
            "Config file not found: {}",
            config_path.display()
        )));
    } else {
        Config::default()
    };

    apply_env_overrides(config)
}

fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(output) = non_empty_env_var("SPLITS_OUTPUT") {
        config.output = parse_setting("SPLITS_OUTPUT", &output)?;
    }
    if let Some(role) = non_empty_env_var("SPLITS_DEFAULT_ROLE") {
        config.default_role = parse_setting("SPLITS_DEFAULT_ROLE", &role)?;
    }
    Ok(config)
}

/// # Errors
/// Returns `SplitsError::ConfigError` for values that do not parse.
pub fn parse_config_content(content: &str) -> Result<Config> {
    let mut config = Config::default();

    for line in content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
    {
        if let Some(value) = parse_key_value(line, "output") {
            config.output = parse_setting("output", &expand_env_vars(value))?;
        }
        if let Some(value) = parse_key_value(line, "log_filter") {
            config.log_filter = expand_env_vars(value);
        }
        if let Some(value) = parse_key_value(line, "default_role") {
            config.default_role = parse_setting("default_role", &expand_env_vars(value))?;
        }
    }

    Ok(config)
}

fn parse_setting<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| SplitsError::ConfigError(format!("Invalid {key}: {e}")))
}

/// Expands `${VAR}` and `${VAR:-default}`. Substituted text is not rescanned.
fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_part = &rest[start + 2..start + end];
        let (var_name, default) = var_part.split_once(":-").unwrap_or((var_part, ""));
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_else(|_| default.to_string()));
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

pub fn parse_key_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.split_once('=')
        .and_then(|(lhs, rhs)| (lhs.trim() == key).then_some(rhs.trim().trim_matches('"')))
}

fn non_empty_env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
