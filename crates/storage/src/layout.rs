use std::path::{Path, PathBuf};

/// Name of the exercises subdirectory that holds quizzes.
pub const QUIZZES_DIR_NAME: &str = "quizzes";

/// Default file and directory names inside a curriculum checkout.
pub const DEFAULT_STATE_FILE: &str = ".rustlings-state.txt";
pub const DEFAULT_EXERCISES_DIR: &str = "exercises";
pub const DEFAULT_OUTPUT_FILE: &str = "README.md";

/// Source file extension for exercises and quizzes.
pub const SOURCE_EXTENSION: &str = "rs";

/// Where the state file, exercises and report live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurriculumLayout {
    state_file: PathBuf,
    exercises_dir: PathBuf,
    output_file: PathBuf,
}

impl CurriculumLayout {
    #[must_use]
    pub fn new(
        state_file: impl Into<PathBuf>,
        exercises_dir: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            state_file: state_file.into(),
            exercises_dir: exercises_dir.into(),
            output_file: output_file.into(),
        }
    }

    /// Standard layout of a rustlings checkout rooted at `root`.
    #[must_use]
    pub fn rustlings(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::new(
            root.join(DEFAULT_STATE_FILE),
            root.join(DEFAULT_EXERCISES_DIR),
            root.join(DEFAULT_OUTPUT_FILE),
        )
    }

    #[must_use]
    pub fn with_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_file = path.into();
        self
    }

    #[must_use]
    pub fn with_exercises_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.exercises_dir = path.into();
        self
    }

    #[must_use]
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    #[must_use]
    pub fn state_file(&self) -> &Path {
        &self.state_file
    }

    #[must_use]
    pub fn exercises_dir(&self) -> &Path {
        &self.exercises_dir
    }

    /// Quizzes live in a reserved subdirectory of the exercises root.
    #[must_use]
    pub fn quizzes_dir(&self) -> PathBuf {
        self.exercises_dir.join(QUIZZES_DIR_NAME)
    }

    #[must_use]
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}
