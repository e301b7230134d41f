//! `dfmanager restore`: replace the agent with the archive file.

use std::path::Path;

use anyhow::Result;

use crate::app::{AppContext, SessionArgs};
use crate::application::ports::ArchiveStore;
use crate::infra::fs::LocalArchiveStore;
use crate::output::progress::with_spinner;
use crate::output::{ArchiveOperation, ArchiveReport};

/// Run the restore command.
///
/// Restore is destructive, so it asks for confirmation unless `--yes`, `CI`
/// or `DFMANAGER_YES` is set. The archive is read before the prompt and
/// before authenticating.
///
/// # Errors
///
/// Returns an error if the file read, authentication or the restore fails.
pub fn run(app: &AppContext, args: &SessionArgs) -> Result<()> {
    let credentials = app.credentials(args)?;
    let path = credentials.archive_path(args);
    let archive = LocalArchiveStore.read_archive(Path::new(&path))?;

    let prompt = format!(
        "Replace the whole agent of '{}' with {path}? Intents and entities not in the archive are deleted",
        credentials.project
    );
    if !(app.non_interactive || app.confirm(&prompt, false)?) {
        return app.renderer().render_cancelled(ArchiveOperation::Restore, &credentials.project);
    }

    let manager = app.connect(&credentials)?;
    with_spinner(
        &app.output,
        &format!("restoring '{}' from {path}...", credentials.project),
        || manager.restore(&archive),
    )?;

    app.renderer().render_archive(&ArchiveReport {
        operation: ArchiveOperation::Restore,
        project: credentials.project,
        file: path,
        bytes: archive.len(),
    })
}
