//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and the wire types crate,
//! never from `crate::infra`, `crate::commands`, or `crate::output`.
//!
//! Every port is synchronous: one operation runs per process and callers
//! block for its duration.

use std::path::{Path, PathBuf};

use anyhow::Result;
use dialogflow_types::{
    BatchUpdateEntityTypesRequest, ExportAgentRequest, ImportAgentRequest,
    ListEntityTypesResponse, Operation, RestoreAgentRequest,
};

use crate::domain::config::DfConfig;
use crate::domain::error::ManagerResult;

// ── Remote API Port ───────────────────────────────────────────────────────────

/// The Dialogflow agent surface, one method per remote call.
///
/// Implementations map transport failures and HTTP error bodies to
/// `ManagerError::Remote`. Operation polling and `Operation.error` handling
/// belong to the caller.
pub trait AgentApi {
    /// Start an agent export under `parent` (`projects/{p}/agent`).
    fn export_agent(&self, parent: &str, request: &ExportAgentRequest)
    -> ManagerResult<Operation>;
    /// Start an additive import.
    fn import_agent(&self, parent: &str, request: &ImportAgentRequest)
    -> ManagerResult<Operation>;
    /// Start a full replacement of the agent.
    fn restore_agent(
        &self,
        parent: &str,
        request: &RestoreAgentRequest,
    ) -> ManagerResult<Operation>;
    /// Fetch the current state of a long-running operation.
    fn get_operation(&self, name: &str) -> ManagerResult<Operation>;
    /// Fetch one page of entity types.
    fn list_entity_types(
        &self,
        parent: &str,
        page_token: Option<&str>,
    ) -> ManagerResult<ListEntityTypesResponse>;
    /// Start a batch update of entity types.
    fn batch_update_entity_types(
        &self,
        parent: &str,
        request: &BatchUpdateEntityTypesRequest,
    ) -> ManagerResult<Operation>;
}

// ── Archive Port ──────────────────────────────────────────────────────────────

/// Local storage for agent archives. Bytes pass through untouched.
pub trait ArchiveStore {
    /// Read the whole archive at `path`.
    fn read_archive(&self, path: &Path) -> ManagerResult<Vec<u8>>;
    /// Create or truncate `path` and write all of `bytes`.
    fn write_archive(&self, path: &Path, bytes: &[u8]) -> ManagerResult<()>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when none is saved.
    fn load(&self) -> Result<DfConfig>;
    /// Persist the given configuration.
    fn save(&self, config: &DfConfig) -> Result<()>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}
