//! Domain types and validators for dfmanager configuration.
//!
//! Pure functions only; no I/O, no filesystem access.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_API_ENDPOINT: &str = "https://dialogflow.googleapis.com";
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api.endpoint",
    "api.timeout_secs",
    "operation.poll_interval_ms",
];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.dfmanager/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DfConfig {
    pub api: ApiConfig,
    pub operation: OperationConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the Dialogflow REST service, without the version path.
    pub endpoint: String,
    /// Per-request transport deadline.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout_secs: 120,
        }
    }
}

/// Long-running operation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OperationConfig {
    /// Delay between two polls of an unfinished operation.
    pub poll_interval_ms: u64,
}

impl Default for OperationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
        }
    }
}

impl DfConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.operation.poll_interval_ms)
    }

    /// Endpoint with any trailing `/` removed.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.api.endpoint.trim_end_matches('/')
    }

    /// Set `key` to `value` after validating both.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "api.endpoint" => self.api.endpoint = value.to_string(),
            "api.timeout_secs" => self.api.timeout_secs = parse_positive(key, value)?,
            "operation.poll_interval_ms" => {
                self.operation.poll_interval_ms = parse_positive(key, value)?;
            }
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }

    /// Current value of `key` rendered as text.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api.endpoint" => Some(self.api.endpoint.clone()),
            "api.timeout_secs" => Some(self.api.timeout_secs.to_string()),
            "operation.poll_interval_ms" => Some(self.operation.poll_interval_ms.to_string()),
            _ => None,
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    match key {
        "api.endpoint" => {
            let is_url = (value.starts_with("https://") || value.starts_with("http://"))
                && value.len() > "https://".len();
            if !is_url {
                return Err(invalid(key, value, "Expected an http:// or https:// URL"));
            }
        }
        "api.timeout_secs" | "operation.poll_interval_ms" => {
            parse_positive(key, value)?;
        }
        _ => {}
    }
    Ok(())
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(invalid(key, value, "Expected a positive integer")),
    }
}

fn invalid(key: &str, value: &str, expected: &'static str) -> anyhow::Error {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
    .into()
}

// ── Unit tests ───────────────────────────────────────────────────────────────
