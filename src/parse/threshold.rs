use chrono::NaiveDate;
use regex::Regex;

/// Strict threshold pattern: a separating space, then `t:` and a 4-2-2
/// digit date. Stricter than the generic tag codec: a `t:` value that is
/// not a well-formed date is not a threshold.
fn threshold_pattern() -> Regex {
    Regex::new(r" t:(\d{4})-(\d{2})-(\d{2})").unwrap()
}

/// Parse the threshold date out of a task line.
///
/// Returns `None` when there is no ` t:YYYY-MM-DD` token or the digits do
/// not form a real calendar date. Absence of a threshold is never an
/// error; callers bucket such lines as unscheduled.
pub fn parse_threshold(line: &str) -> Option<NaiveDate> {
    let caps = threshold_pattern().captures(line)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
