// file: src/profile/sorter.rs
// description: recency-aware ordering of repositories within a group
// reference: two-tier comparator, recent first then alphabetical or by update time

use crate::models::RepositoryRecord;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Repositories updated fewer than this many whole days ago are "recent".
pub const RECENCY_WINDOW_DAYS: i64 = 3;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days between `updated_at` and `now`, floor-divided.
pub fn elapsed_days(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - updated_at)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

pub fn is_recent(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    elapsed_days(updated_at, now) < RECENCY_WINDOW_DAYS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecencySorter {
    now: DateTime<Utc>,
    direction: SortDirection,
}

impl RecencySorter {
    pub fn new(now: DateTime<Utc>, direction: SortDirection) -> Self {
        Self { now, direction }
    }

    /// Recent before older; recent by name in `direction`, older by
    /// `updated_at` newest first. Ties compare equal.
    pub fn compare(&self, a: &RepositoryRecord, b: &RepositoryRecord) -> Ordering {
        let a_recent = is_recent(a.updated_at, self.now);
        let b_recent = is_recent(b.updated_at, self.now);

        match (a_recent, b_recent) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => {
                let ordering = compare_names(&a.name, &b.name);
                match self.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
            (false, false) => b.updated_at.cmp(&a.updated_at),
        }
    }

    /// Stable sort into a new vector; the input is left untouched.
    pub fn sort(&self, records: &[RepositoryRecord]) -> Vec<RepositoryRecord> {
        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
