use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::ExerciseId;

static NUMBERED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<base>[A-Za-z_]+?)(?P<num>[0-9]+)$").expect("numbered name pattern is valid")
});

/// An exercise source file found under a numbered topic folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub folder_prefix: i64,
    pub id: ExerciseId,
}

/// Ordering key: folder prefix, then base name, then trailing number.
///
/// `variables10` sorts after `variables9` because the trailing digits are
/// compared numerically. Names without trailing digits use the whole name
/// as base and `0` as number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseSortKey {
    pub folder_prefix: i64,
    pub base: String,
    pub num: u64,
}

impl ExerciseEntry {
    #[must_use]
    pub fn new(folder_prefix: i64, id: ExerciseId) -> Self {
        Self { folder_prefix, id }
    }

    #[must_use]
    pub fn sort_key(&self) -> ExerciseSortKey {
        let name = self.id.as_str();
        let split = NUMBERED_NAME.captures(name).and_then(|caps| {
            let num = caps["num"].parse::<u64>().ok()?;
            Some((caps["base"].to_owned(), num))
        });
        let (base, num) = split.unwrap_or_else(|| (name.to_owned(), 0));

        ExerciseSortKey {
            folder_prefix: self.folder_prefix,
            base,
            num,
        }
    }

    fn cmp_for_report(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Sorts exercises into report order.
///
/// Ties on the sort key fall back to the identifier so the order never
/// depends on directory listing order.
pub fn sort_exercises(entries: &mut [ExerciseEntry]) {
    entries.sort_by(ExerciseEntry::cmp_for_report);
}
