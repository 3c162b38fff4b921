//! Filesystem adapter: reads the state file and scans the exercise tree.

use progress_core::model::{CompletedSet, ExerciseEntry, QuizEntry};

use crate::layout::CurriculumLayout;
use crate::repository::{CompletionRepository, CurriculumRepository, StorageError};

mod discovery;
mod state_file;

pub use discovery::{discover_exercises, discover_quizzes, parse_folder_prefix};
pub use state_file::read_completed;

/// Repository over a curriculum checkout on disk.
#[derive(Debug, Clone)]
pub struct FsRepository {
    layout: CurriculumLayout,
}

impl FsRepository {
    #[must_use]
    pub fn new(layout: CurriculumLayout) -> Self {
        Self { layout }
    }
}

impl CompletionRepository for FsRepository {
    fn state_exists(&self) -> bool {
        self.layout.state_file().exists()
    }

    fn load_completed(&self) -> Result<CompletedSet, StorageError> {
        read_completed(self.layout.state_file())
    }
}

impl CurriculumRepository for FsRepository {
    fn exercises(&self) -> Result<Vec<ExerciseEntry>, StorageError> {
        discover_exercises(self.layout.exercises_dir())
    }

    fn quizzes(&self) -> Result<Vec<QuizEntry>, StorageError> {
        discover_quizzes(&self.layout.quizzes_dir())
    }
}
