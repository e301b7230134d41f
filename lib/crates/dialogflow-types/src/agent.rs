//! Agent archive requests and responses.
//!
//! The REST transport carries `agentContent` as base64 text; these types
//! expose it as raw archive bytes.

use serde::{Deserialize, Serialize};

/// Body of `projects/{p}/agent:export`.
///
/// Leaving `agent_uri` unset asks the service to inline the archive in the
/// operation response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportAgentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_uri: Option<String>,
}

/// Response payload of a finished export operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportAgentResponse {
    /// Zipped agent archive.
    #[serde(default, with = "base64_bytes_opt", skip_serializing_if = "Option::is_none")]
    pub agent_content: Option<Vec<u8>>,
    /// Set instead of `agent_content` when the export went to Cloud Storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_uri: Option<String>,
}

/// Body of `projects/{p}/agent:import` (additive merge).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportAgentRequest {
    #[serde(with = "base64_bytes")]
    pub agent_content: Vec<u8>,
}

/// Body of `projects/{p}/agent:restore` (full replacement).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestoreAgentRequest {
    #[serde(with = "base64_bytes")]
    pub agent_content: Vec<u8>,
}

mod base64_bytes {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD.decode(text).map_err(serde::de::Error::custom)
    }
}

mod base64_bytes_opt {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)] // serde `with` hands us `&Option<T>`
    pub fn serialize<S: Serializer>(
        bytes: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| STANDARD.decode(text).map_err(serde::de::Error::custom))
            .transpose()
    }
}
