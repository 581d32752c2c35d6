//! Path helpers for report output

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Base name of a file as it appears in the report
///
/// Paths without a final component (e.g. `/` or `..`) fall back to the
/// normalized full path so a row is never written with an empty filename.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| normalize_path(path))
}
