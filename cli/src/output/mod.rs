//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod styles;

use anyhow::Result;
use console::Term;
use dialogflow_types::EntityType;
use owo_colors::OwoColorize as _;
use serde::Serialize;
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::domain::config::DfConfig;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        Self {
            styles: Styles::for_terminal(use_colors),
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }
}

/// Which archive operation a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveOperation {
    Export,
    Import,
    Restore,
}

/// Outcome of an export, import or restore.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveReport {
    pub operation: ArchiveOperation,
    pub project: String,
    pub file: String,
    pub bytes: usize,
}

/// A destructive operation the user declined at the confirmation prompt.
#[derive(Debug, Clone, Serialize)]
pub struct CancelledReport {
    pub operation: ArchiveOperation,
    pub project: String,
    pub cancelled: bool,
}

impl CancelledReport {
    #[must_use]
    pub fn new(operation: ArchiveOperation, project: &str) -> Self {
        Self {
            operation,
            project: project.to_string(),
            cancelled: true,
        }
    }
}

/// Renders command results in the active output mode.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the outcome of an archive operation.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_archive(&self, report: &ArchiveReport) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_archive(report);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(report),
        }
    }

    /// Render a declined confirmation. JSON mode still prints one object.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_cancelled(&self, operation: ArchiveOperation, project: &str) -> Result<()> {
        let report = CancelledReport::new(operation, project);
        match self {
            Self::Human(r) => {
                r.render_cancelled(&report);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&report),
        }
    }

    /// Render the entity types of `project`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_entity_types(&self, project: &str, entity_types: &[EntityType]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_entity_types(project, entity_types);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&serde_json::json!({
                "project": project,
                "entityTypes": entity_types,
            })),
        }
    }

    /// Render the outcome of an entity batch update.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_entities_updated(&self, entity_type: &str, count: usize) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_entities_updated(entity_type, count);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&serde_json::json!({
                "entityType": entity_type,
                "entities": count,
            })),
        }
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &DfConfig, path: &std::path::Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&serde_json::json!({
                "path": path.display().to_string(),
                "config": config,
            })),
        }
    }
}
