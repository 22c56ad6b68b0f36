//! Filesystem helpers.

use std::path::Path;

/// Read `path` and return its contents with trailing whitespace removed.
///
/// Missing or unreadable files yield an empty string.
pub fn read(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => contents.trim_end().to_string(),
        Err(e) => {
            tracing::debug!("read {} failed, using empty string: {e}", path.display());
            String::new()
        }
    }
}
