//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, SessionArgs};
use crate::commands;

/// Dialogflow Agent Manager
#[derive(Parser)]
#[command(
    name = "dfmanager",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to the service-account key file
    #[arg(short, long, global = true, env = "GCP_KEY")]
    pub key: Option<PathBuf>,

    /// Google Cloud project ID (defaults to the key's project_id)
    #[arg(short, long, global = true, env = "GCE_PROJECT")]
    pub project: Option<String>,

    /// Archive file; `.zip` is appended when missing (defaults to <project>.zip)
    #[arg(short, long, global = true)]
    pub file: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also disabled by a set `NO_COLOR`)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Log requests and operation polling to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export the agent into the archive file
    #[command(visible_alias = "e")]
    Export,

    /// Import the archive file into the agent (merge)
    #[command(visible_alias = "i")]
    Import,

    /// Restore the agent from the archive file (replace)
    #[command(visible_alias = "r")]
    Restore,

    /// List entity types
    #[command(name = "entity-types", visible_alias = "et")]
    EntityTypes,

    /// Replace the entities of one entity type
    #[command(name = "update-entities", visible_alias = "ue")]
    UpdateEntities(commands::entities::UpdateEntitiesArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<()> {
        let Cli {
            key,
            project,
            file,
            json,
            quiet,
            no_color,
            yes,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            no_color,
            quiet,
            json,
            yes,
        });
        let session = SessionArgs { key, project, file };

        match command {
            Command::Export => commands::export::run(&app, &session),
            Command::Import => commands::import::run(&app, &session),
            Command::Restore => commands::restore::run(&app, &session),
            Command::EntityTypes => commands::entities::list(&app, &session),
            Command::UpdateEntities(args) => commands::entities::update(&app, &session, &args),
            Command::Config(cmd) => commands::config::run(&app, cmd),
        }
    }
}
