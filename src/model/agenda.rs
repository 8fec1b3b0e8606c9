use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Bucket key of the agenda: a parsed threshold date, or the marker for
/// lines carrying none. "No threshold" is distinct from "due today";
/// merging the two is the explicit `promote_unscheduled` step, never a
/// parse-time default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScheduleKey {
    Date(NaiveDate),
    Unscheduled,
}

/// A retained line of a task file together with its original 1-based
/// position. Line numbers count every physical line, so they stay valid
/// against the file on disk even when blank lines were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine {
    pub nr: usize,
    pub text: String,
}

/// Mapping from threshold date (or the unscheduled marker) to the task
/// lines due then. Built in one pass by the reader; apart from
/// `promote_unscheduled` it is not mutated after construction.
///
/// Insertion order inside a bucket follows file order but is not part of
/// the contract — display code sorts by raw text when it needs a stable
/// order.
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    buckets: BTreeMap<ScheduleKey, Vec<TaskLine>>,
}

impl Agenda {
    pub fn new() -> Agenda {
        Agenda::default()
    }

    /// Append a line to the bucket for `key`, creating the bucket if
    /// needed.
    pub(crate) fn insert(&mut self, key: ScheduleKey, line: TaskLine) {
        self.buckets.entry(key).or_default().push(line);
    }

    /// All buckets in key order (dates ascending, unscheduled last).
    pub fn buckets(&self) -> impl Iterator<Item = (&ScheduleKey, &[TaskLine])> {
        self.buckets.iter().map(|(key, lines)| (key, lines.as_slice()))
    }

    pub fn bucket(&self, key: &ScheduleKey) -> Option<&[TaskLine]> {
        self.buckets.get(key).map(|lines| lines.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of non-empty buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Merge the unscheduled bucket into the bucket for `date`, removing
    /// the unscheduled key. No-op when every line already has a threshold.
    pub fn promote_unscheduled(&mut self, date: NaiveDate) {
        if let Some(mut lines) = self.buckets.remove(&ScheduleKey::Unscheduled) {
            self.buckets
                .entry(ScheduleKey::Date(date))
                .or_default()
                .append(&mut lines);
        }
    }
}
