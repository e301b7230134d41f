//! Filesystem infrastructure: implements `ArchiveStore` on local files.

use std::path::Path;

use crate::application::ports::ArchiveStore;
use crate::domain::error::{ManagerError, ManagerResult};

/// Production `ArchiveStore`: one file per archive, bytes written verbatim.
pub struct LocalArchiveStore;

impl ArchiveStore for LocalArchiveStore {
    fn read_archive(&self, path: &Path) -> ManagerResult<Vec<u8>> {
        let bytes = std::fs::read(path).map_err(|e| ManagerError::io("read", path, e))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "archive read");
        Ok(bytes)
    }

    fn write_archive(&self, path: &Path, bytes: &[u8]) -> ManagerResult<()> {
        std::fs::write(path, bytes).map_err(|e| ManagerError::io("write", path, e))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "archive written");
        Ok(())
    }
}
