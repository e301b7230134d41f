//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: archive files, the
//! configuration file, the OAuth token exchange and the Dialogflow REST client.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod auth;
pub mod config;
pub mod dialogflow;
pub mod fs;
