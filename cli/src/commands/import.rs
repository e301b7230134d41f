//! `dfmanager import`: merge the archive file into the agent.

use std::path::Path;

use anyhow::Result;

use crate::app::{AppContext, SessionArgs};
use crate::application::ports::ArchiveStore;
use crate::infra::fs::LocalArchiveStore;
use crate::output::progress::with_spinner;
use crate::output::{ArchiveOperation, ArchiveReport};

/// Run the import command.
///
/// The archive is read before authenticating, so a missing file is reported
/// as such even when the service is unreachable.
///
/// # Errors
///
/// Returns an error if the file read, authentication or the import fails.
pub fn run(app: &AppContext, args: &SessionArgs) -> Result<()> {
    let credentials = app.credentials(args)?;
    let path = credentials.archive_path(args);
    let archive = LocalArchiveStore.read_archive(Path::new(&path))?;

    let manager = app.connect(&credentials)?;
    with_spinner(
        &app.output,
        &format!("importing {path} into '{}'...", credentials.project),
        || manager.import(&archive),
    )?;

    app.renderer().render_archive(&ArchiveReport {
        operation: ArchiveOperation::Import,
        project: credentials.project,
        file: path,
        bytes: archive.len(),
    })
}
