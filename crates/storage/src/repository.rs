use std::path::PathBuf;
use std::sync::Arc;

use progress_core::model::{CompletedSet, ExerciseEntry, QuizEntry};
use thiserror::Error;

use crate::fs::FsRepository;
use crate::layout::CurriculumLayout;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("state file not found: {}", .0.display())]
    StateNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

/// Source of the learner's completion state.
pub trait CompletionRepository: Send + Sync {
    /// Whether a completion state exists at all.
    fn state_exists(&self) -> bool;

    /// Load the set of completed identifiers.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::StateNotFound` if there is no state, or other storage errors.
    fn load_completed(&self) -> Result<CompletedSet, StorageError>;
}

/// Source of the exercises and quizzes that make up the curriculum.
pub trait CurriculumRepository: Send + Sync {
    /// Discover all exercises, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the exercise tree cannot be read.
    fn exercises(&self) -> Result<Vec<ExerciseEntry>, StorageError>;

    /// Discover all quizzes, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the quizzes directory exists but cannot be read.
    fn quizzes(&self) -> Result<Vec<QuizEntry>, StorageError>;
}

/// Repositories used by a report run.
#[derive(Clone)]
pub struct Storage {
    pub completions: Arc<dyn CompletionRepository>,
    pub curriculum: Arc<dyn CurriculumRepository>,
}

impl Storage {
    /// Build a `Storage` reading from a curriculum checkout on disk.
    #[must_use]
    pub fn filesystem(layout: &CurriculumLayout) -> Self {
        let repo = Arc::new(FsRepository::new(layout.clone()));
        Self {
            completions: repo.clone(),
            curriculum: repo,
        }
    }

    /// Build a `Storage` backed by an in-memory repository.
    #[must_use]
    pub fn in_memory(repo: InMemoryRepository) -> Self {
        let repo = Arc::new(repo);
        Self {
            completions: repo.clone(),
            curriculum: repo,
        }
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    completed: Option<CompletedSet>,
    exercises: Vec<ExerciseEntry>,
    quizzes: Vec<QuizEntry>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_completed(mut self, completed: CompletedSet) -> Self {
        self.completed = Some(completed);
        self
    }

    #[must_use]
    pub fn with_exercise(mut self, entry: ExerciseEntry) -> Self {
        self.exercises.push(entry);
        self
    }

    #[must_use]
    pub fn with_quiz(mut self, entry: QuizEntry) -> Self {
        self.quizzes.push(entry);
        self
    }
}

impl CompletionRepository for InMemoryRepository {
    fn state_exists(&self) -> bool {
        self.completed.is_some()
    }

    fn load_completed(&self) -> Result<CompletedSet, StorageError> {
        self.completed
            .clone()
            .ok_or_else(|| StorageError::StateNotFound(PathBuf::from("<memory>")))
    }
}

impl CurriculumRepository for InMemoryRepository {
    fn exercises(&self) -> Result<Vec<ExerciseEntry>, StorageError> {
        Ok(self.exercises.clone())
    }

    fn quizzes(&self) -> Result<Vec<QuizEntry>, StorageError> {
        Ok(self.quizzes.clone())
    }
}
