use std::fs;
use std::path::Path;

use progress_core::model::{ExerciseId, sort_exercises, sort_quizzes};
use storage::fs::{FsRepository, discover_exercises, discover_quizzes, read_completed};
use storage::repository::{CompletionRepository, CurriculumRepository, StorageError};
use storage::{CurriculumLayout, Storage};
use tempfile::TempDir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "fn main() {}\n").unwrap();
}

fn checkout() -> TempDir {
    let dir = TempDir::new().unwrap();
    let ex = dir.path().join("exercises");
    touch(&ex.join("00_intro/intro1.rs"));
    touch(&ex.join("00_intro/intro2.rs"));
    touch(&ex.join("00_intro/README.md"));
    touch(&ex.join("01_variables/variables1.rs"));
    touch(&ex.join("01_variables/variables10.rs"));
    touch(&ex.join("01_variables/variables2.rs"));
    touch(&ex.join("quizzes/quiz1.rs"));
    touch(&ex.join("quizzes/quiz10.rs"));
    touch(&ex.join("quizzes/quiz2.rs"));
    touch(&ex.join("quizzes/helper.rs"));
    touch(&ex.join("quizzes/README.md"));
    touch(&ex.join("scratch/ignored1.rs"));
    touch(&ex.join("notes.rs"));
    fs::write(
        dir.path().join(".rustlings-state.txt"),
        "DON'T EDIT THIS FILE!\n\nintro1\nintro2\n",
    )
    .unwrap();
    dir
}

fn names<'a>(ids: impl Iterator<Item = &'a ExerciseId>) -> Vec<String> {
    ids.map(ToString::to_string).collect()
}

#[test]
fn discovers_exercises_from_numbered_folders_only() {
    let dir = checkout();
    let mut exercises = discover_exercises(&dir.path().join("exercises")).unwrap();
    sort_exercises(&mut exercises);

    assert_eq!(
        names(exercises.iter().map(|e| &e.id)),
        vec!["intro1", "intro2", "variables1", "variables2", "variables10"]
    );
    assert_eq!(exercises[0].folder_prefix, 0);
    assert_eq!(exercises[4].folder_prefix, 1);
}

#[test]
fn discovers_numbered_quizzes_only() {
    let dir = checkout();
    let mut quizzes = discover_quizzes(&dir.path().join("exercises/quizzes")).unwrap();
    sort_quizzes(&mut quizzes);

    assert_eq!(
        names(quizzes.iter().map(|q| &q.id)),
        vec!["quiz1", "quiz2", "quiz10"]
    );
}

#[test]
fn missing_directories_yield_empty_results() {
    let dir = TempDir::new().unwrap();
    assert!(discover_exercises(&dir.path().join("exercises")).unwrap().is_empty());
    assert!(discover_quizzes(&dir.path().join("exercises/quizzes")).unwrap().is_empty());
}

#[test]
fn read_completed_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = read_completed(&dir.path().join(".rustlings-state.txt")).unwrap_err();
    assert!(matches!(err, StorageError::StateNotFound(_)));
}

#[test]
fn fs_repository_reads_layout() {
    let dir = checkout();
    let repo = FsRepository::new(CurriculumLayout::rustlings(dir.path()));

    assert!(repo.state_exists());
    let completed = repo.load_completed().unwrap();
    assert_eq!(completed.len(), 2);
    assert_eq!(repo.exercises().unwrap().len(), 5);
    assert_eq!(repo.quizzes().unwrap().len(), 3);
}

#[test]
fn storage_filesystem_shares_one_layout() {
    let dir = checkout();
    fs::remove_file(dir.path().join(".rustlings-state.txt")).unwrap();
    let storage = Storage::filesystem(&CurriculumLayout::rustlings(dir.path()));

    assert!(!storage.completions.state_exists());
    assert_eq!(storage.curriculum.exercises().unwrap().len(), 5);
}

#[cfg(unix)]
#[test]
fn dangling_symlinks_are_skipped() {
    use std::os::unix::fs::symlink;

    let dir = checkout();
    let ex = dir.path().join("exercises");
    let gone = dir.path().join("does-not-exist");
    symlink(&gone, ex.join("05_gone")).unwrap();
    symlink(&gone, ex.join("00_intro/.#intro1.rs")).unwrap();
    symlink(&gone, ex.join("00_intro/stale.txt")).unwrap();
    symlink(&gone, ex.join("quizzes/quiz3.rs")).unwrap();

    let mut exercises = discover_exercises(&ex).unwrap();
    sort_exercises(&mut exercises);
    assert_eq!(
        names(exercises.iter().map(|e| &e.id)),
        vec!["intro1", "intro2", "variables1", "variables2", "variables10"]
    );

    let mut quizzes = discover_quizzes(&ex.join("quizzes")).unwrap();
    sort_quizzes(&mut quizzes);
    assert_eq!(
        names(quizzes.iter().map(|q| &q.id)),
        vec!["quiz1", "quiz2", "quiz10"]
    );
}

#[cfg(unix)]
#[test]
fn symlinked_topic_folder_is_followed() {
    use std::os::unix::fs::symlink;

    let dir = checkout();
    let outside = dir.path().join("shared/extra");
    touch(&outside.join("extras1.rs"));
    symlink(&outside, dir.path().join("exercises/02_extras")).unwrap();

    let mut exercises = discover_exercises(&dir.path().join("exercises")).unwrap();
    sort_exercises(&mut exercises);

    let last = exercises.last().unwrap();
    assert_eq!(last.folder_prefix, 2);
    assert_eq!(last.id.as_str(), "extras1");
}

#[test]
fn entries_of_the_wrong_kind_are_skipped() {
    let dir = checkout();
    let ex = dir.path().join("exercises");
    // A file whose name looks like a topic folder.
    touch(&ex.join("03_loose"));
    // A directory whose name looks like a source file.
    fs::create_dir_all(ex.join("00_intro/folder1.rs")).unwrap();
    fs::create_dir_all(ex.join("quizzes/quiz4.rs")).unwrap();
    // A file named only by the extension has no identifier.
    touch(&ex.join("00_intro/.rs"));

    let exercises = discover_exercises(&ex).unwrap();
    assert_eq!(exercises.len(), 5);
    assert!(exercises.iter().all(|e| e.id.as_str() != "folder1"));

    let quizzes = discover_quizzes(&ex.join("quizzes")).unwrap();
    assert_eq!(quizzes.len(), 3);
}

#[cfg(unix)]
#[test]
fn non_utf8_names_are_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = checkout();
    let ex = dir.path().join("exercises");
    let bad_folder = ex.join(OsStr::from_bytes(b"04_\xff\xfe"));
    touch(&bad_folder.join("weird1.rs"));
    touch(&ex.join("00_intro").join(OsStr::from_bytes(b"intro\xff.rs")));

    let exercises = discover_exercises(&ex).unwrap();
    assert_eq!(exercises.len(), 5);
    assert!(exercises.iter().all(|e| e.id.as_str() != "weird1"));
}
