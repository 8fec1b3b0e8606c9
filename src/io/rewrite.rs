use std::collections::BTreeSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::io::todo_io::TodoError;

/// Append lines to a task file, creating it if missing. Each line gets a
/// trailing newline.
pub fn append_lines(path: &Path, lines: &[String]) -> Result<(), TodoError> {
    if lines.is_empty() {
        return Ok(());
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TodoError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    for line in lines {
        writeln!(file, "{}", line).map_err(|e| TodoError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Replace `path` with `content` via a temp file in the same directory and
/// a single atomic rename. The original stays intact until the rename.
pub fn replace_file(path: &Path, content: &str) -> Result<(), TodoError> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| TodoError::WriteError {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// Move the lines whose 1-based numbers are in `line_nrs` from `from` to
/// `to`.
///
/// Selected lines are appended to `to`; the rest are streamed into a
/// replacement for `from` that is committed with a temp-file rename. With
/// `preserve_numbering` each moved line leaves an empty placeholder so the
/// remaining lines keep their positions; otherwise the file compacts.
/// An empty selection appends nothing and rewrites `from` unchanged.
/// Returns the number of lines moved.
pub fn move_lines(
    from: &Path,
    to: &Path,
    line_nrs: &BTreeSet<usize>,
    preserve_numbering: bool,
) -> Result<usize, TodoError> {
    let source = File::open(from).map_err(|e| TodoError::ReadError {
        path: from.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(source);

    let dir = from.parent().unwrap_or(Path::new("."));
    let mut replacement = NamedTempFile::new_in(dir)?;
    let mut dest = OpenOptions::new()
        .create(true)
        .append(true)
        .open(to)
        .map_err(|e| TodoError::WriteError {
            path: to.to_path_buf(),
            source: e,
        })?;

    let mut moved = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| TodoError::ReadError {
            path: from.to_path_buf(),
            source: e,
        })?;
        if line_nrs.contains(&(idx + 1)) {
            writeln!(dest, "{}", line).map_err(|e| TodoError::WriteError {
                path: to.to_path_buf(),
                source: e,
            })?;
            moved += 1;
            if preserve_numbering {
                writeln!(replacement)?;
            }
        } else {
            writeln!(replacement, "{}", line)?;
        }
    }

    replacement.flush()?;
    replacement.persist(from).map_err(|e| TodoError::WriteError {
        path: from.to_path_buf(),
        source: e.error,
    })?;
    Ok(moved)
}
