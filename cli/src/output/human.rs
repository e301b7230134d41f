//! Human-readable terminal renderer.

use dialogflow_types::EntityType;
use owo_colors::OwoColorize as _;

use crate::domain::config::{DfConfig, VALID_CONFIG_KEYS};
use crate::output::{ArchiveOperation, ArchiveReport, CancelledReport, OutputContext};

/// Renders results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the outcome of an archive operation.
    pub fn render_archive(&self, report: &ArchiveReport) {
        self.ctx.success(&archive_message(report));
    }

    /// Render a declined confirmation.
    pub fn render_cancelled(&self, report: &CancelledReport) {
        self.ctx.warn(&cancelled_message(report));
    }

    /// Render the entity types as a table.
    pub fn render_entity_types(&self, project: &str, entity_types: &[EntityType]) {
        if self.ctx.quiet {
            return;
        }
        if entity_types.is_empty() {
            println!("No entity types in project '{project}'.");
            return;
        }

        println!(
            "  {:<24} {:<16} {:>8}  {}",
            "NAME".style(self.ctx.styles.column),
            "KIND".style(self.ctx.styles.column),
            "ENTITIES".style(self.ctx.styles.column),
            "ID".style(self.ctx.styles.column),
        );
        for et in entity_types {
            let kind = et.kind.strip_prefix("KIND_").unwrap_or(&et.kind);
            println!(
                "  {:<24} {:<16} {:>8}  {}",
                et.display_name,
                kind.to_lowercase().style(self.ctx.styles.kind),
                et.entities.len(),
                short_id(&et.name).style(self.ctx.styles.resource),
            );
        }
    }

    /// Render the outcome of an entity batch update.
    pub fn render_entities_updated(&self, entity_type: &str, count: usize) {
        self.ctx
            .success(&format!("Replaced entities of {entity_type} ({count} entities)"));
    }

    /// Render the current dfmanager configuration.
    pub fn render_config(&self, config: &DfConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.title)
        );
        println!();
        for key in VALID_CONFIG_KEYS {
            let value = config.get(key).unwrap_or_default();
            println!("  {:<28} {value}", format!("{key}:"));
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.column));
        for var in ["DFMANAGER_CONFIG", "GCP_KEY", "GCE_PROJECT"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }
}

/// One-line summary of a finished archive operation.
pub(crate) fn archive_message(report: &ArchiveReport) -> String {
    let ArchiveReport {
        project,
        file,
        bytes,
        ..
    } = report;
    match report.operation {
        ArchiveOperation::Export => format!("Exported agent '{project}' to {file} ({bytes} bytes)"),
        ArchiveOperation::Import => format!("Imported {file} into agent '{project}'"),
        ArchiveOperation::Restore => format!("Restored agent '{project}' from {file}"),
    }
}

pub(crate) fn cancelled_message(report: &CancelledReport) -> String {
    let verb = match report.operation {
        ArchiveOperation::Export => "Export",
        ArchiveOperation::Import => "Import",
        ArchiveOperation::Restore => "Restore",
    };
    format!("{verb} of agent '{}' cancelled", report.project)
}

/// Last path segment of a resource name.
fn short_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
