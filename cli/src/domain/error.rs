//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands` or
//! `crate::application`. All error types implement `thiserror::Error` and
//! convert to `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for agent manager operations.
pub type ManagerResult<T> = Result<T, ManagerError>;

// ── Manager errors ────────────────────────────────────────────────────────────

/// Every way an agent operation can fail. All of them are terminal for the
/// invoking command.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Local file open/read/write failure. The I/O reason is the source.
    #[error("cannot {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The service reported an error payload, or the call itself failed.
    #[error("{0}")]
    Remote(String),

    #[error("invalid service account key: {0}")]
    InvalidCredentials(String),

    #[error("argument {0} is missed")]
    MissingArgument(&'static str),
}

impl ManagerError {
    /// Wrap an I/O failure on `path`.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Wrap a service-side or transport failure.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io_error",
            Self::Remote(_) => "remote_error",
            Self::InvalidCredentials(_) => "invalid_credentials",
            Self::MissingArgument(_) => "missing_argument",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}
