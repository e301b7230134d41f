//! `dfmanager export`: download the agent into the archive file.

use std::path::Path;

use anyhow::Result;

use crate::app::{AppContext, SessionArgs};
use crate::output::progress::with_spinner;
use crate::output::{ArchiveOperation, ArchiveReport};

/// Run the export command.
///
/// The archive file is written only after the export succeeded.
///
/// # Errors
///
/// Returns an error if authentication, the export or the file write fails.
pub fn run(app: &AppContext, args: &SessionArgs) -> Result<()> {
    let credentials = app.credentials(args)?;
    let path = credentials.archive_path(args);
    let manager = app.connect(&credentials)?;

    let bytes = with_spinner(
        &app.output,
        &format!("exporting agent '{}'...", credentials.project),
        || manager.export_to_file(Path::new(&path)),
    )?;

    app.renderer().render_archive(&ArchiveReport {
        operation: ArchiveOperation::Export,
        project: credentials.project,
        file: path,
        bytes,
    })
}
