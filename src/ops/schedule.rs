use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::model::agenda::{Agenda, ScheduleKey};

/// Last date still inside the horizon: `now + horizon_days`, by real
/// calendar arithmetic (unlike the fixed-table interval math used for
/// recurrence).
pub fn horizon_limit(now: NaiveDate, horizon_days: u32) -> NaiveDate {
    now.checked_add_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Line numbers of every task due on or before `now + horizon_days`.
///
/// Overdue dates are included however far back they reach. The unscheduled
/// bucket is never selected here; callers that want unscheduled lines
/// treated as due today promote them first.
pub fn due_line_numbers(agenda: &Agenda, now: NaiveDate, horizon_days: u32) -> BTreeSet<usize> {
    let limit = horizon_limit(now, horizon_days);
    let mut result = BTreeSet::new();
    for (key, lines) in agenda.buckets() {
        if let ScheduleKey::Date(date) = key {
            if *date <= limit {
                result.extend(lines.iter().map(|line| line.nr));
            }
        }
    }
    result
}
