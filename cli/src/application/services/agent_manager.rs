//! Application service: agent export/import/restore and entity-type use-cases.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through the injected `AgentApi` and `ArchiveStore`.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use dialogflow_types::{
    BatchUpdateEntityTypesRequest, Entity, EntityType, EntityTypeBatch, ExportAgentRequest,
    ExportAgentResponse, ImportAgentRequest, Operation, RestoreAgentRequest,
};

use crate::application::ports::{AgentApi, ArchiveStore};
use crate::domain::error::{ManagerError, ManagerResult};
use crate::domain::resource::{agent_parent, entity_type_name};

/// Delay between two polls of an unfinished operation unless configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// One authenticated session bound to a single project.
///
/// Each operation issues one remote call, blocks until any long-running
/// operation it started resolves, and surfaces service errors as
/// `ManagerError::Remote`. Nothing is retried.
pub struct AgentManager<A, S> {
    api: A,
    store: S,
    project: String,
    poll_interval: Duration,
}

impl<A: AgentApi, S: ArchiveStore> AgentManager<A, S> {
    /// Bind `api` and `store` to `project`.
    pub fn new(api: A, store: S, project: impl Into<String>) -> Self {
        Self {
            api,
            store,
            project: project.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the delay between operation polls.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Download the agent archive.
    ///
    /// # Errors
    ///
    /// Returns `Remote` if the call fails, the operation reports an error, or
    /// the service exported to Cloud Storage instead of inlining the archive.
    pub fn export(&self) -> ManagerResult<Vec<u8>> {
        let parent = agent_parent(&self.project);
        tracing::info!(%parent, "exporting agent");

        let op = self.api.export_agent(&parent, &ExportAgentRequest::default())?;
        let op = self.wait(op)?;

        let response: ExportAgentResponse = op
            .response_as()
            .map_err(|e| ManagerError::remote(format!("malformed export response: {e}")))?
            .unwrap_or_default();
        if let Some(uri) = response.agent_uri {
            return Err(ManagerError::remote(format!(
                "agent was exported to {uri} instead of being returned inline"
            )));
        }

        let content = response.agent_content.unwrap_or_default();
        tracing::debug!(bytes = content.len(), "agent exported");
        Ok(content)
    }

    /// Export the agent and write it to `path`.
    ///
    /// The file is only touched once the export has succeeded.
    ///
    /// # Errors
    ///
    /// Returns `Remote` if the export fails, `Io` if the write fails.
    pub fn export_to_file(&self, path: &Path) -> ManagerResult<usize> {
        let content = self.export()?;
        self.store.write_archive(path, &content)?;
        Ok(content.len())
    }

    /// Upload `archive`, merging it into the current agent.
    ///
    /// # Errors
    ///
    /// Returns `Remote` if the service rejects the archive.
    pub fn import(&self, archive: &[u8]) -> ManagerResult<()> {
        let parent = agent_parent(&self.project);
        tracing::info!(%parent, bytes = archive.len(), "importing agent");

        let request = ImportAgentRequest {
            agent_content: archive.to_vec(),
        };
        let op = self.api.import_agent(&parent, &request)?;
        self.wait(op)?;
        Ok(())
    }

    /// Read the archive at `path` and import it. Returns the archive size.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `Remote` if the import fails.
    pub fn import_file(&self, path: &Path) -> ManagerResult<usize> {
        let archive = self.store.read_archive(path)?;
        self.import(&archive)?;
        Ok(archive.len())
    }

    /// Replace the current agent with `archive`. Destructive.
    ///
    /// # Errors
    ///
    /// Returns `Remote` if the service rejects the archive.
    pub fn restore(&self, archive: &[u8]) -> ManagerResult<()> {
        let parent = agent_parent(&self.project);
        tracing::info!(%parent, bytes = archive.len(), "restoring agent");

        let request = RestoreAgentRequest {
            agent_content: archive.to_vec(),
        };
        let op = self.api.restore_agent(&parent, &request)?;
        self.wait(op)?;
        Ok(())
    }

    /// Read the archive at `path` and restore from it. Returns the archive size.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `Remote` if the restore fails.
    pub fn restore_file(&self, path: &Path) -> ManagerResult<usize> {
        let archive = self.store.read_archive(path)?;
        self.restore(&archive)?;
        Ok(archive.len())
    }

    /// Fetch every entity type of the project, following pagination to the end.
    ///
    /// # Errors
    ///
    /// Returns `Remote` if any page cannot be fetched.
    pub fn list_entity_types(&self) -> ManagerResult<Vec<EntityType>> {
        let parent = agent_parent(&self.project);
        let mut entity_types = Vec::new();
        let mut page_token: Option<String> = None;
        let mut seen = HashSet::new();

        loop {
            tracing::debug!(%parent, page_token = ?page_token, "listing entity types");
            let page = self.api.list_entity_types(&parent, page_token.as_deref())?;
            let next = page.next_page().map(str::to_string);
            entity_types.extend(page.entity_types);
            let Some(token) = next else { break };
            if !seen.insert(token.clone()) {
                return Err(ManagerError::remote(format!(
                    "entity type listing returned page token {token:?} twice"
                )));
            }
            page_token = Some(token);
        }

        tracing::info!(count = entity_types.len(), "entity types listed");
        Ok(entity_types)
    }

    /// Overwrite the entity list of one entity type with `entities`.
    ///
    /// `entity_type` is an ID or a full `projects/.../entityTypes/...` name.
    ///
    /// # Errors
    ///
    /// Returns `Remote` if the service rejects the batch.
    pub fn batch_update_entities(
        &self,
        entity_type: &str,
        entities: Vec<Entity>,
    ) -> ManagerResult<()> {
        let parent = agent_parent(&self.project);
        let name = entity_type_name(&self.project, entity_type);
        tracing::info!(entity_type = %name, count = entities.len(), "updating entities");

        let request = BatchUpdateEntityTypesRequest {
            entity_type_batch_inline: EntityTypeBatch {
                entity_types: vec![EntityType {
                    name,
                    entities,
                    ..EntityType::default()
                }],
            },
            language_code: None,
            update_mask: Some("entities".to_string()),
        };
        let op = self.api.batch_update_entity_types(&parent, &request)?;
        self.wait(op)?;
        Ok(())
    }

    /// Block until `op` is done, then surface its error if it has one.
    fn wait(&self, mut op: Operation) -> ManagerResult<Operation> {
        let mut attempt: u32 = 0;
        loop {
            if let Some(status) = op.error.take() {
                tracing::debug!(operation = %op.name, code = status.code, "operation failed");
                return Err(if status.message.is_empty() {
                    ManagerError::remote(format!("operation failed with code {}", status.code))
                } else {
                    ManagerError::Remote(status.message)
                });
            }
            if op.done {
                return Ok(op);
            }
            if op.name.is_empty() {
                return Err(ManagerError::remote(
                    "service returned an unfinished operation without a name",
                ));
            }

            attempt += 1;
            tracing::debug!(operation = %op.name, attempt, "operation still running");
            std::thread::sleep(self.poll_interval);
            op = self.api.get_operation(&op.name)?;
        }
    }
}
