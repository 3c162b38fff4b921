use serde::{Deserialize, Serialize};

use crate::model::{CompletedSet, ExerciseId, Status};

/// Whether the first unfinished entry is marked as `current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentMarking {
    Enabled,
    Disabled,
}

/// One row of a status table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRow {
    pub id: ExerciseId,
    pub status: Status,
}

/// Status rows in report order plus the entry chosen as `current`, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTable {
    pub rows: Vec<StatusRow>,
    pub current: Option<ExerciseId>,
}

impl StatusTable {
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.status == Status::Completed)
            .count()
    }
}

/// Assigns a status to every identifier, in the given order.
///
/// Completed identifiers are `completed`. With `CurrentMarking::Enabled` the
/// first identifier not in `completed` becomes `current`; every other
/// unfinished identifier is `not started`.
pub fn assign_statuses<'a, I>(
    ids: I,
    completed: &CompletedSet,
    marking: CurrentMarking,
) -> StatusTable
where
    I: IntoIterator<Item = &'a ExerciseId>,
{
    let mut table = StatusTable::default();

    for id in ids {
        let status = if completed.contains(id) {
            Status::Completed
        } else if marking == CurrentMarking::Enabled && table.current.is_none() {
            table.current = Some(id.clone());
            Status::Current
        } else {
            Status::NotStarted
        };
        table.rows.push(StatusRow {
            id: id.clone(),
            status,
        });
    }

    table
}
