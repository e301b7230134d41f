//! Command implementations
//!
//! Each agent command is a plain function of the application context and the
//! global session flags; `Cli::run` maps command names onto them statically.

pub mod config;
pub mod entities;
pub mod export;
pub mod import;
pub mod restore;
