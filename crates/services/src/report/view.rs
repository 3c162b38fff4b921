use serde::Serialize;

use progress_core::model::{CompletedSet, ExerciseEntry, ExerciseId, QuizEntry};
use progress_core::{CurrentMarking, StatusRow, assign_statuses};

/// Everything the progress document shows, in report order.
///
/// Presentation-agnostic: the Markdown and JSON renderers both read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub current: Option<ExerciseId>,
    pub exercises: Vec<StatusRow>,
    pub quizzes: Vec<StatusRow>,

    pub completed_exercises: usize,
    pub total_exercises: usize,
    pub completed_quizzes: usize,
    pub total_quizzes: usize,
}

impl ProgressReport {
    /// Build the report from already sorted exercises and quizzes.
    #[must_use]
    pub fn build(
        exercises: &[ExerciseEntry],
        quizzes: &[QuizEntry],
        completed: &CompletedSet,
    ) -> Self {
        let exercise_table = assign_statuses(
            exercises.iter().map(|e| &e.id),
            completed,
            CurrentMarking::Enabled,
        );
        let quiz_table = assign_statuses(
            quizzes.iter().map(|q| &q.id),
            completed,
            CurrentMarking::Disabled,
        );

        Self {
            completed_exercises: exercise_table.completed_count(),
            total_exercises: exercise_table.rows.len(),
            completed_quizzes: quiz_table.completed_count(),
            total_quizzes: quiz_table.rows.len(),
            current: exercise_table.current,
            exercises: exercise_table.rows,
            quizzes: quiz_table.rows,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }
}
