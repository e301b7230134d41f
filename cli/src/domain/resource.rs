//! Dialogflow resource names.

/// `projects/{project}/agent`: parent of every agent-scoped call.
#[must_use]
pub fn agent_parent(project: &str) -> String {
    format!("projects/{project}/agent")
}

/// Full resource name of an entity type.
///
/// Accepts either a bare entity-type ID or an already-qualified
/// `projects/.../entityTypes/...` name, which is returned unchanged.
#[must_use]
pub fn entity_type_name(project: &str, id_or_name: &str) -> String {
    if id_or_name.starts_with("projects/") {
        id_or_name.to_string()
    } else {
        format!("{}/entityTypes/{id_or_name}", agent_parent(project))
    }
}
