use std::io::ErrorKind;
use std::path::Path;

use progress_core::model::{ExerciseEntry, ExerciseId, QuizEntry};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::layout::{QUIZZES_DIR_NAME, SOURCE_EXTENSION};
use crate::repository::StorageError;

/// Parse the ordering prefix of a topic folder such as `03_if`.
///
/// The prefix is the text before the first underscore, trimmed, as a signed
/// integer. Returns `None` when it is not a number.
#[must_use]
pub fn parse_folder_prefix(folder: &str) -> Option<i64> {
    let head = folder.split('_').next().unwrap_or(folder);
    head.trim().parse::<i64>().ok()
}

/// Immediate children of `dir`, sorted by name.
fn children(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
}

/// Unwrap one listed child.
///
/// Children that vanish or point nowhere (dangling symlinks, link loops) are
/// skipped. Failing to list the directory itself is still an error.
fn child_entry(
    entry: Result<DirEntry, walkdir::Error>,
) -> Result<Option<DirEntry>, StorageError> {
    match entry {
        Ok(entry) => Ok(Some(entry)),
        Err(err) if err.depth() > 0 && is_broken_link(&err) => {
            debug!(path = ?err.path(), %err, "skipping unreadable entry");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn is_broken_link(err: &walkdir::Error) -> bool {
    err.loop_ancestor().is_some()
        || err
            .io_error()
            .is_some_and(|io| io.kind() == ErrorKind::NotFound)
}

/// File stem of a source file, or `None` for anything else.
fn source_stem(entry: &DirEntry) -> Option<&str> {
    if !entry.file_type().is_file() {
        return None;
    }
    let name = entry.file_name().to_str()?;
    let stem = name.strip_suffix(SOURCE_EXTENSION)?.strip_suffix('.')?;
    Some(stem)
}

/// Collect exercises from every numbered topic folder under `root`.
///
/// The quizzes folder, folders without a numeric prefix, non-directories and
/// non-source files are skipped. A missing `root` yields no exercises.
///
/// # Errors
///
/// Returns `StorageError::Walk` if a directory cannot be listed.
pub fn discover_exercises(root: &Path) -> Result<Vec<ExerciseEntry>, StorageError> {
    if !root.is_dir() {
        warn!(path = %root.display(), "exercises directory not found");
        return Ok(Vec::new());
    }

    let mut exercises = Vec::new();

    for folder in children(root) {
        let Some(folder) = child_entry(folder)? else {
            continue;
        };
        if !folder.file_type().is_dir() {
            continue;
        }
        let Some(folder_name) = folder.file_name().to_str() else {
            continue;
        };
        if folder_name == QUIZZES_DIR_NAME {
            continue;
        }
        let Some(prefix) = parse_folder_prefix(folder_name) else {
            debug!(folder = folder_name, "skipping folder without numeric prefix");
            continue;
        };

        for file in children(folder.path()) {
            let Some(file) = child_entry(file)? else {
                continue;
            };
            let Some(stem) = source_stem(&file) else {
                continue;
            };
            match ExerciseId::new(stem) {
                Ok(id) => exercises.push(ExerciseEntry::new(prefix, id)),
                Err(err) => debug!(file = %file.path().display(), %err, "skipping exercise file"),
            }
        }
    }

    debug!(count = exercises.len(), "discovered exercises");
    Ok(exercises)
}

/// Collect `quizN` source files from `dir`. A missing `dir` yields no quizzes.
///
/// # Errors
///
/// Returns `StorageError::Walk` if the directory exists but cannot be listed.
pub fn discover_quizzes(dir: &Path) -> Result<Vec<QuizEntry>, StorageError> {
    if !dir.is_dir() {
        debug!(path = %dir.display(), "no quizzes directory");
        return Ok(Vec::new());
    }

    let mut quizzes = Vec::new();
    for file in children(dir) {
        let Some(file) = child_entry(file)? else {
            continue;
        };
        if let Some(quiz) = source_stem(&file).and_then(QuizEntry::from_stem) {
            quizzes.push(quiz);
        }
    }

    debug!(count = quizzes.len(), "discovered quizzes");
    Ok(quizzes)
}
