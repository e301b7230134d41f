//! Agent archive naming.
//!
//! Pure functions only; no I/O. The archive itself is an opaque zip blob and
//! is never inspected.

/// Extension every archive file name ends with.
pub const ARCHIVE_EXTENSION: &str = ".zip";

/// Derive the archive file name for `project`.
///
/// - no override (or an empty one): `<project>.zip`
/// - override without the extension: `<override>.zip`
/// - override already ending in `.zip`: unchanged
#[must_use]
pub fn resolve_filename(project: &str, file_override: Option<&str>) -> String {
    match file_override.filter(|name| !name.is_empty()) {
        None => format!("{project}{ARCHIVE_EXTENSION}"),
        Some(name) if name.ends_with(ARCHIVE_EXTENSION) => name.to_string(),
        Some(name) => format!("{name}{ARCHIVE_EXTENSION}"),
    }
}
