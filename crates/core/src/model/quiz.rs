use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::ExerciseId;

static QUIZ_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^quiz(?P<num>[0-9]+)$").expect("quiz name pattern is valid"));

/// A quiz source file, ordered by its number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizEntry {
    pub index: u64,
    pub id: ExerciseId,
}

impl QuizEntry {
    /// Parses a quiz from a file stem such as `quiz3`.
    ///
    /// Returns `None` for names that are not `quiz` followed by digits.
    #[must_use]
    pub fn from_stem(stem: &str) -> Option<Self> {
        let caps = QUIZ_NAME.captures(stem)?;
        let index = caps["num"].parse::<u64>().ok()?;
        let id = ExerciseId::new(stem).ok()?;
        Some(Self { index, id })
    }
}

/// Sorts quizzes by number, then by name.
pub fn sort_quizzes(entries: &mut [QuizEntry]) {
    entries.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.id.cmp(&b.id)));
}
