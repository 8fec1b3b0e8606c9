use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::model::agenda::{Agenda, ScheduleKey, TaskLine};
use crate::parse::parse_threshold;

/// Error type for task file operations
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a task file into an agenda.
///
/// Physical lines are numbered from 1, counting every line. Lines that are
/// blank after trailing-whitespace stripping are skipped but still consume
/// a number, so retained entries keep their true file position. Lines
/// without a well-formed ` t:YYYY-MM-DD` tag land in the unscheduled
/// bucket; a malformed threshold is never an error.
pub fn read_agenda(path: &Path) -> Result<Agenda, TodoError> {
    let file = File::open(path).map_err(|e| TodoError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut agenda = Agenda::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| TodoError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let text = line.trim_end();
        if text.is_empty() {
            continue;
        }
        let key = match parse_threshold(text) {
            Some(date) => ScheduleKey::Date(date),
            None => ScheduleKey::Unscheduled,
        };
        agenda.insert(
            key,
            TaskLine {
                nr: idx + 1,
                text: text.to_string(),
            },
        );
    }

    Ok(agenda)
}
