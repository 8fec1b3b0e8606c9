use chrono::{Days, NaiveDate};
use regex::Regex;

/// Calendar unit of a recurrence interval, with its fixed day multiplier.
///
/// Months and years use fixed 30 and 365 day spans, so interval arithmetic
/// stays a plain day addition. The approximation is part of the scheme's
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
}

impl Unit {
    /// Day multiplier for this unit.
    pub fn days(self) -> u64 {
        match self {
            Unit::Year => 365,
            Unit::Month => 30,
            Unit::Week => 7,
            Unit::Day => 1,
        }
    }

    /// Parse the single-letter suffix used in `rec:` values.
    pub fn from_suffix(c: char) -> Option<Unit> {
        match c {
            'y' => Some(Unit::Year),
            'm' => Some(Unit::Month),
            'w' => Some(Unit::Week),
            'd' => Some(Unit::Day),
            _ => None,
        }
    }
}

/// A parsed `rec:` value: `<count><unit>`, e.g. `2w` or `10d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recurrence {
    pub count: u32,
    pub unit: Unit,
}

impl Recurrence {
    /// Parse an interval token. Anything that is not exactly
    /// `<digits><ymwd>` is rejected.
    pub fn parse(token: &str) -> Option<Recurrence> {
        let re = Regex::new(r"^(\d+)([ymwd])$").unwrap();
        let caps = re.captures(token)?;
        let count: u32 = caps[1].parse().ok()?;
        let unit = Unit::from_suffix(caps[2].chars().next()?)?;
        Some(Recurrence { count, unit })
    }

    /// Total day span of this interval under the fixed day table.
    pub fn total_days(self) -> u64 {
        u64::from(self.count) * self.unit.days()
    }
}

/// Add an interval token to an ISO-8601 date string, returning the result
/// formatted as `YYYY-MM-DD`.
///
/// Returns `None` when either operand fails to parse; the recurrence
/// expander treats that sentinel as loop termination.
pub fn add_interval(date_iso: &str, token: &str) -> Option<String> {
    let rec = Recurrence::parse(token)?;
    let date = NaiveDate::parse_from_str(date_iso, "%Y-%m-%d").ok()?;
    let shifted = date.checked_add_days(Days::new(rec.total_days()))?;
    Some(shifted.format("%Y-%m-%d").to_string())
}
