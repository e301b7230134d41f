//! Entity types and their batch-update request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entity: canonical value plus synonyms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub value: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// A named category of entities, forwarded as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    /// `projects/{p}/agent/entityTypes/{id}`.
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Fields this tool does not look at (`autoExpansionMode`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of `projects/{p}/agent/entityTypes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListEntityTypesResponse {
    #[serde(default)]
    pub entity_types: Vec<EntityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl ListEntityTypesResponse {
    /// Token for the following page, ignoring the empty string the service
    /// sends on the last page.
    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Inline batch of entity types.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeBatch {
    pub entity_types: Vec<EntityType>,
}

/// Body of `projects/{p}/agent/entityTypes:batchUpdate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateEntityTypesRequest {
    pub entity_type_batch_inline: EntityTypeBatch,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Comma-separated field mask, e.g. `entities`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<String>,
}
