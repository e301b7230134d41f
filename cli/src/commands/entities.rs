//! `dfmanager entity-types` and `dfmanager update-entities`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use dialogflow_types::Entity;
use serde::Deserialize;

use crate::app::{AppContext, SessionArgs};
use crate::domain::error::ManagerError;
use crate::domain::resource::entity_type_name;
use crate::output::progress::with_spinner;

/// Arguments for the update-entities command.
#[derive(Args)]
pub struct UpdateEntitiesArgs {
    /// Entity type ID or full `projects/.../entityTypes/...` name
    pub entity_type: String,

    /// JSON file: an array of `{"value", "synonyms"}` or an entity type object
    pub entities: PathBuf,
}

/// Accepted shapes of the entities file.
#[derive(Deserialize)]
#[serde(untagged)]
enum EntitiesFile {
    List(Vec<Entity>),
    EntityType { entities: Vec<Entity> },
}

/// Parse the content of an entities file.
///
/// # Errors
///
/// Returns an error if the content matches neither accepted shape.
pub fn parse_entities(content: &str) -> Result<Vec<Entity>> {
    let file: EntitiesFile = serde_json::from_str(content).context(
        "expected a JSON array of {\"value\", \"synonyms\"} or an object with \"entities\"",
    )?;
    Ok(match file {
        EntitiesFile::List(entities) | EntitiesFile::EntityType { entities } => entities,
    })
}

fn read_entities(path: &Path) -> Result<Vec<Entity>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ManagerError::io("read", path, e))?;
    parse_entities(&content).with_context(|| format!("cannot parse {}", path.display()))
}

/// List every entity type of the project.
///
/// # Errors
///
/// Returns an error if authentication or the listing fails.
pub fn list(app: &AppContext, args: &SessionArgs) -> Result<()> {
    let credentials = app.credentials(args)?;
    let manager = app.connect(&credentials)?;

    let entity_types = with_spinner(&app.output, "listing entity types...", || {
        manager.list_entity_types()
    })?;
    app.renderer()
        .render_entity_types(&credentials.project, &entity_types)
}

/// Replace the entities of one entity type with the content of a file.
///
/// The file is parsed before any remote call is made.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if
/// authentication or the batch update fails.
pub fn update(app: &AppContext, args: &SessionArgs, cmd: &UpdateEntitiesArgs) -> Result<()> {
    let credentials = app.credentials(args)?;
    let entities = read_entities(&cmd.entities)?;
    let count = entities.len();
    let name = entity_type_name(&credentials.project, &cmd.entity_type);

    let manager = app.connect(&credentials)?;
    with_spinner(&app.output, &format!("updating {name}..."), || {
        manager.batch_update_entities(&name, entities)
    })?;
    app.renderer().render_entities_updated(&name, count)
}
