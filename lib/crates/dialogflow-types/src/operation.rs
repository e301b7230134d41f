//! `google.longrunning.Operation` and `google.rpc.Status`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A server-side long-running operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Resource name used to poll the operation, e.g.
    /// `projects/p/operations/1234`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Set when the operation failed. Mutually exclusive with `response`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

impl Operation {
    /// Decode the `response` payload into `T`.
    ///
    /// Returns `Ok(None)` when the operation carries no response (still
    /// running, failed, or an `Empty` result).
    pub fn response_as<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        self.response
            .clone()
            .map(serde_json::from_value)
            .transpose()
    }
}

/// RPC status attached to failed operations and HTTP error bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
    /// Canonical status name; only present in HTTP error bodies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<Value>,
}

/// Body of a non-2xx Google API response: `{"error": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    pub error: Status,
}
