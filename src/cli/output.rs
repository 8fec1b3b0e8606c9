use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::agenda::{Agenda, ScheduleKey, TaskLine};
use crate::ops::recur::Expansion;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub nr: usize,
    pub text: String,
}

#[derive(Serialize)]
pub struct AgendaDayJson {
    pub date: String,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct MoveJson {
    pub moved: usize,
    pub lines: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct ExpansionJson {
    pub added: Vec<String>,
    pub rescheduled: Vec<String>,
}

// ---------------------------------------------------------------------------
// Selection helpers
// ---------------------------------------------------------------------------

/// Collect the buckets due on or before `limit` in date order, each
/// bucket's lines sorted by raw text for a stable display.
pub fn due_buckets(agenda: &Agenda, limit: NaiveDate) -> Vec<(NaiveDate, Vec<TaskLine>)> {
    let mut result = Vec::new();
    for (key, lines) in agenda.buckets() {
        if let ScheduleKey::Date(date) = key {
            if *date <= limit {
                let mut lines = lines.to_vec();
                lines.sort_by(|a, b| a.text.cmp(&b.text));
                result.push((*date, lines));
            }
        }
    }
    result
}

/// Look up the task lines behind a set of line numbers, in number order.
pub fn lines_by_nr(agenda: &Agenda, nrs: &BTreeSet<usize>) -> Vec<TaskLine> {
    let mut result: Vec<TaskLine> = agenda
        .buckets()
        .flat_map(|(_, lines)| lines.iter())
        .filter(|line| nrs.contains(&line.nr))
        .cloned()
        .collect();
    result.sort_by_key(|line| line.nr);
    result
}

// ---------------------------------------------------------------------------
// Rendering and conversions
// ---------------------------------------------------------------------------

/// Render the agenda overview as text: one dated heading per bucket, its
/// lines indented with their file line numbers.
pub fn render_agenda(buckets: &[(NaiveDate, Vec<TaskLine>)]) -> String {
    let mut out = String::new();
    for (date, lines) in buckets {
        out.push_str(&format!("{}\n", date.format("%Y-%m-%d")));
        for line in lines {
            out.push_str(&format!("  {:>3} {}\n", line.nr, line.text));
        }
    }
    out
}

pub fn agenda_to_json(buckets: &[(NaiveDate, Vec<TaskLine>)]) -> Vec<AgendaDayJson> {
    buckets
        .iter()
        .map(|(date, lines)| AgendaDayJson {
            date: date.format("%Y-%m-%d").to_string(),
            tasks: lines.iter().map(task_to_json).collect(),
        })
        .collect()
}

pub fn move_to_json(moved: &[TaskLine]) -> MoveJson {
    MoveJson {
        moved: moved.len(),
        lines: moved.iter().map(task_to_json).collect(),
    }
}

pub fn expansion_to_json(expansion: &Expansion) -> ExpansionJson {
    ExpansionJson {
        added: expansion.emitted.clone(),
        rescheduled: expansion.rewritten.clone(),
    }
}

fn task_to_json(line: &TaskLine) -> TaskJson {
    TaskJson {
        nr: line.nr,
        text: line.text.clone(),
    }
}
