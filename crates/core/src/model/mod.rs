mod completion;
mod exercise;
mod ids;
mod quiz;
mod status;

pub use completion::{CompletedSet, STATE_MARKER};
pub use exercise::{ExerciseEntry, ExerciseSortKey, sort_exercises};
pub use ids::{ExerciseId, IdError};
pub use quiz::{QuizEntry, sort_quizzes};
pub use status::Status;
