use std::collections::BTreeSet;

use crate::model::ExerciseId;

/// Marker line the exercise runner writes at the top of its state file.
pub const STATE_MARKER: &str = "DON'T EDIT THIS FILE!";

/// Identifiers the learner has finished, loaded once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedSet {
    ids: BTreeSet<ExerciseId>,
}

impl CompletedSet {
    /// Parses state file contents: one identifier per line.
    ///
    /// Lines are trimmed. Blank lines and the [`STATE_MARKER`] line are skipped.
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        let ids = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && *line != STATE_MARKER)
            .filter_map(|line| ExerciseId::new(line).ok())
            .collect();
        Self { ids }
    }

    #[must_use]
    pub fn contains(&self, id: &ExerciseId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ExerciseId> for CompletedSet {
    fn from_iter<T: IntoIterator<Item = ExerciseId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
