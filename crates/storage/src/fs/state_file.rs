use std::io::ErrorKind;
use std::path::Path;

use progress_core::model::CompletedSet;
use tracing::debug;

use crate::repository::StorageError;

/// Read the completion state file at `path`.
///
/// # Errors
///
/// Returns `StorageError::StateNotFound` if the file does not exist and
/// `StorageError::Io` if it cannot be read.
pub fn read_completed(path: &Path) -> Result<CompletedSet, StorageError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            StorageError::StateNotFound(path.to_path_buf())
        } else {
            StorageError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let completed = CompletedSet::parse(&contents);
    debug!(path = %path.display(), completed = completed.len(), "loaded completion state");
    Ok(completed)
}
