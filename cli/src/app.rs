//! Application context: unified state passed to every command handler.
//!
//! `AppContext` carries the output mode, the config store and the
//! interactivity policy. It also turns the global `--key/--project/--file`
//! flags into an authenticated `AgentManager` bound to one project.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::services::AgentManager;
use crate::application::services::config_service;
use crate::domain::archive::resolve_filename;
use crate::domain::config::DfConfig;
use crate::domain::credentials::ServiceAccountKey;
use crate::domain::error::ManagerError;
use crate::infra::auth;
use crate::infra::config::YamlConfigStore;
use crate::infra::dialogflow::DialogflowClient;
use crate::infra::fs::LocalArchiveStore;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// The production manager: Dialogflow REST client plus local archive files.
pub type Manager = AgentManager<DialogflowClient, LocalArchiveStore>;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
    /// Skip interactive prompts (also set by `CI` / `DFMANAGER_YES` env vars).
    pub yes: bool,
}

/// The global session flags every agent command receives.
#[derive(Debug, Clone, Default)]
pub struct SessionArgs {
    /// Path to the service-account key file.
    pub key: Option<PathBuf>,
    /// Project ID; falls back to the key's `project_id`.
    pub project: Option<String>,
    /// Archive file override.
    pub file: Option<String>,
}

/// Resolved, not yet connected, session inputs.
#[derive(Debug)]
pub struct Credentials {
    pub key: ServiceAccountKey,
    pub project: String,
}

impl Credentials {
    /// Archive path for this project honouring the `--file` override.
    #[must_use]
    pub fn archive_path(&self, args: &SessionArgs) -> String {
        resolve_filename(&self.project, args.file.as_deref())
    }
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Configuration persistence.
    pub config_store: YamlConfigStore,
    /// When `true`, skip interactive prompts and use defaults.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `DFMANAGER_YES`
    /// environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("DFMANAGER_YES").is_ok();
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.no_color, flags.quiet || flags.json),
            mode,
            config_store: YamlConfigStore,
            non_interactive: flags.yes || ci_env,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Load the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn config(&self) -> Result<DfConfig> {
        config_service::load_config(&self.config_store)
    }

    /// Read the key file and settle the project ID. No network access.
    ///
    /// # Errors
    ///
    /// Returns `MissingArgument` when no key path or project is available,
    /// `Io` when the key file cannot be read and `InvalidCredentials` when it
    /// is not a service-account key.
    pub fn credentials(&self, args: &SessionArgs) -> Result<Credentials, ManagerError> {
        let key_path = args
            .key
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ManagerError::MissingArgument("key"))?;
        let key = auth::load_key(key_path)?;

        let project = args
            .project
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| key.project())
            .map(str::to_string)
            .ok_or(ManagerError::MissingArgument("project"))?;

        Ok(Credentials { key, project })
    }

    /// Authenticate and build the manager for `credentials.project`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the token
    /// exchange fails.
    pub fn connect(&self, credentials: &Credentials) -> Result<Manager> {
        let config = self.config()?;
        let client = DialogflowClient::connect(&config, &credentials.key)?;
        Ok(
            AgentManager::new(client, LocalArchiveStore, credentials.project.clone())
                .with_poll_interval(config.poll_interval()),
        )
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI, `--yes` flag, or `DFMANAGER_YES`
    /// env), returns `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
