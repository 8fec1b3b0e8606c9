use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::io::rewrite::{append_lines, replace_file};
use crate::io::todo_io::TodoError;
use crate::model::recurrence::add_interval;
use crate::parse::{get_tag, set_tag};

/// Result of a recurrence expansion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Lines appended to the destination, `rec` stripped, one per
    /// occurrence inside the horizon.
    pub emitted: Vec<String>,
    /// Source lines whose threshold moved to the next future occurrence.
    pub rewritten: Vec<String>,
}

/// Expand recurring tasks from `from` into `to`.
///
/// A line takes part only when it carries both a `rec:` and a `t:` tag;
/// everything else copies through untouched. For each occurrence with
/// threshold `<= max_threshold` one copy is emitted with `rec` removed and
/// `t` set to that occurrence. The comparison is lexical, which matches
/// chronological order because both sides are ISO-8601. The source line's
/// threshold then advances to the first occurrence past the horizon. An
/// interval that fails to parse ends the occurrence loop for that line;
/// it is not an error.
///
/// With `dry_run` the expansion is computed without touching either file.
/// Otherwise emitted lines are appended to `to` and `from` is replaced via
/// a temp file and one atomic rename.
pub fn expand_recurring(
    from: &Path,
    to: &Path,
    max_threshold: &str,
    dry_run: bool,
) -> Result<Expansion, TodoError> {
    let source = File::open(from).map_err(|e| TodoError::ReadError {
        path: from.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(source);

    let mut expansion = Expansion::default();
    let mut replacement = String::new();

    for line in reader.lines() {
        let line = line.map_err(|e| TodoError::ReadError {
            path: from.to_path_buf(),
            source: e,
        })?;
        match expand_line(&line, max_threshold, &mut expansion.emitted) {
            Some(rewritten) => {
                replacement.push_str(&rewritten);
                expansion.rewritten.push(rewritten);
            }
            None => replacement.push_str(&line),
        }
        replacement.push('\n');
    }

    if !dry_run {
        append_lines(to, &expansion.emitted)?;
        replace_file(from, &replacement)?;
    }

    Ok(expansion)
}

/// Expand a single line, pushing occurrence copies into `emitted`.
/// Returns the rewritten source line, or `None` when the line is not a
/// recurring task or its threshold never advanced.
fn expand_line(line: &str, max_threshold: &str, emitted: &mut Vec<String>) -> Option<String> {
    let rec = get_tag(line, "rec")?.to_string();
    let original = get_tag(line, "t")?.to_string();

    let mut threshold = original.clone();
    while threshold.as_str() <= max_threshold {
        let occurrence = set_tag(&set_tag(line, "rec", None), "t", Some(&threshold));
        emitted.push(occurrence);
        match add_interval(&threshold, &rec) {
            Some(next) => threshold = next,
            None => break,
        }
    }

    if threshold == original {
        return None;
    }
    Some(set_tag(line, "t", Some(&threshold)))
}
