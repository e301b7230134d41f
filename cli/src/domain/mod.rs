//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs` or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod archive;
pub mod config;
pub mod credentials;
pub mod error;
pub mod resource;

pub use archive::{ARCHIVE_EXTENSION, resolve_filename};
pub use config::{DfConfig, validate_config_key, validate_config_value};
pub use credentials::{AssertionClaims, ServiceAccountKey};
pub use error::{ConfigError, ManagerError, ManagerResult};
