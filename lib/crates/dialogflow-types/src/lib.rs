//! Wire types for the Dialogflow v2 REST surface used by `dfmanager`.
//!
//! Only the agent export/import/restore calls, long-running operations and
//! entity-type listing/batch-update are modelled. Records the tool never
//! inspects keep their unknown fields so they survive a read-modify-write.

pub mod agent;
pub mod entity;
pub mod operation;

pub use agent::{ExportAgentRequest, ExportAgentResponse, ImportAgentRequest, RestoreAgentRequest};
pub use entity::{
    BatchUpdateEntityTypesRequest, Entity, EntityType, EntityTypeBatch, ListEntityTypesResponse,
};
pub use operation::{ErrorEnvelope, Operation, Status};
