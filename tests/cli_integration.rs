//! Integration tests for the `ag` CLI.
//!
//! Each test creates a temp todo directory, runs `ag` as a subprocess
//! with TODO_DIR pointing at it, and verifies stdout and/or file
//! contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `ag` binary.
fn ag_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("ag");
    path
}

/// Create a todo directory with the three task files.
fn create_todo_dir(dir: &Path) {
    fs::write(
        dir.join("todo.txt"),
        "\
Buy milk
Call mom t:2015-01-01
Pay rent t:2015-01-05
Far future t:2015-06-01
",
    )
    .unwrap();

    fs::write(
        dir.join("future.txt"),
        "\
Renew passport t:2015-01-03
Plan vacation t:2015-04-01
Dentist appointment t:2014-12-20
",
    )
    .unwrap();

    fs::write(
        dir.join("recur.txt"),
        "\
Water plants t:2015-01-01 rec:2w
One-off note
",
    )
    .unwrap();
}

/// Run `ag` with the given args and TODO_DIR, returning (stdout, stderr, success).
fn run_ag(todo_dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(ag_bin())
        .args(args)
        .env("TODO_DIR", todo_dir)
        .env_remove("TODOTXT_PRESERVE_LINE_NUMBERS")
        .output()
        .expect("failed to run ag");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `ag` expecting success, return stdout.
fn run_ag_ok(todo_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_ag(todo_dir, args);
    if !success {
        panic!(
            "ag {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

// ---------------------------------------------------------------------------
// agenda
// ---------------------------------------------------------------------------

#[test]
fn test_agenda_overview() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());

    let stdout = run_ag_ok(tmp.path(), &["agenda", "--date", "2015-01-01"]);

    // Unscheduled "Buy milk" shows up under the current date.
    assert!(stdout.contains("2015-01-01"));
    assert!(stdout.contains("Buy milk"));
    assert!(stdout.contains("Call mom"));
    // Due inside the 10-day horizon.
    assert!(stdout.contains("Pay rent"));
    // Beyond the horizon.
    assert!(!stdout.contains("Far future"));
}

#[test]
fn test_agenda_respects_days_flag() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());

    let stdout = run_ag_ok(tmp.path(), &["agenda", "--date", "2015-01-01", "--days", "2"]);
    assert!(stdout.contains("Call mom"));
    assert!(!stdout.contains("Pay rent"));
}

#[test]
fn test_agenda_json() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());

    let stdout = run_ag_ok(tmp.path(), &["agenda", "--date", "2015-01-01", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let days = json.as_array().unwrap();
    assert_eq!(days[0]["date"], "2015-01-01");
    let tasks = days[0]["tasks"].as_array().unwrap();
    assert!(tasks.iter().any(|t| t["text"] == "Buy milk"));
}

#[test]
fn test_agenda_empty_horizon() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("todo.txt"), "Far future t:2020-01-01\n").unwrap();

    let stdout = run_ag_ok(tmp.path(), &["agenda", "--date", "2015-01-01"]);
    assert!(stdout.contains("Nothing scheduled"));
}

// ---------------------------------------------------------------------------
// future
// ---------------------------------------------------------------------------

#[test]
fn test_future_moves_due_lines() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());

    run_ag_ok(tmp.path(), &["future", "--date", "2015-01-01"]);

    let todo = fs::read_to_string(tmp.path().join("todo.txt")).unwrap();
    let future = fs::read_to_string(tmp.path().join("future.txt")).unwrap();

    // Overdue and due-within-horizon lines moved, the rest stayed.
    assert!(todo.contains("Renew passport"));
    assert!(todo.contains("Dentist appointment"));
    assert!(!todo.contains("Plan vacation"));
    assert_eq!(future, "Plan vacation t:2015-04-01\n");
}

#[test]
fn test_future_preserve_line_numbers_flag() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());

    run_ag_ok(
        tmp.path(),
        &["future", "--date", "2015-01-01", "--preserve-line-numbers"],
    );

    let future = fs::read_to_string(tmp.path().join("future.txt")).unwrap();
    // Moved slots become blank placeholders; "Plan vacation" keeps line 2.
    assert_eq!(future, "\nPlan vacation t:2015-04-01\n\n");
}

#[test]
fn test_future_preserve_line_numbers_env() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());

    let output = Command::new(ag_bin())
        .args(["future", "--date", "2015-01-01"])
        .env("TODO_DIR", tmp.path())
        .env("TODOTXT_PRESERVE_LINE_NUMBERS", "1")
        .output()
        .expect("failed to run ag");
    assert!(output.status.success());

    let future = fs::read_to_string(tmp.path().join("future.txt")).unwrap();
    assert_eq!(future, "\nPlan vacation t:2015-04-01\n\n");
}

#[test]
fn test_future_dry_run_leaves_files() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());
    let todo_before = fs::read_to_string(tmp.path().join("todo.txt")).unwrap();
    let future_before = fs::read_to_string(tmp.path().join("future.txt")).unwrap();

    let stdout = run_ag_ok(tmp.path(), &["future", "--date", "2015-01-01", "--dry-run"]);

    assert!(stdout.contains("Renew passport"));
    assert!(stdout.contains("would move"));
    assert_eq!(
        fs::read_to_string(tmp.path().join("todo.txt")).unwrap(),
        todo_before
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("future.txt")).unwrap(),
        future_before
    );
}

#[test]
fn test_future_unscheduled_lines_move_as_is() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("todo.txt"), "").unwrap();
    fs::write(
        tmp.path().join("future.txt"),
        "No threshold here\nLater t:2015-04-01\n",
    )
    .unwrap();

    run_ag_ok(tmp.path(), &["future", "--date", "2015-01-01"]);

    let todo = fs::read_to_string(tmp.path().join("todo.txt")).unwrap();
    assert_eq!(todo, "No threshold here\n");
}

#[test]
fn test_future_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("todo.txt"), "").unwrap();

    let (_, stderr, success) = run_ag(tmp.path(), &["future", "--date", "2015-01-01"]);
    assert!(!success);
    assert!(stderr.contains("future.txt"));
}

// ---------------------------------------------------------------------------
// recur
// ---------------------------------------------------------------------------

#[test]
fn test_recur_expands_and_reschedules() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());

    // Horizon 2015-01-01 + 10 days = 2015-01-11: only the first
    // occurrence fires; the template advances to 2015-01-15.
    run_ag_ok(tmp.path(), &["recur", "--date", "2015-01-01"]);

    let todo = fs::read_to_string(tmp.path().join("todo.txt")).unwrap();
    let recur = fs::read_to_string(tmp.path().join("recur.txt")).unwrap();

    assert!(todo.contains("Water plants t:2015-01-01\n"));
    assert!(!todo.contains("rec:2w"));
    assert_eq!(recur, "Water plants t:2015-01-15 rec:2w\nOne-off note\n");
}

#[test]
fn test_recur_multiple_occurrences() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("todo.txt"), "").unwrap();
    fs::write(
        tmp.path().join("recur.txt"),
        "Water plants t:2015-01-01 rec:2w\n",
    )
    .unwrap();

    run_ag_ok(tmp.path(), &["recur", "--date", "2015-01-01", "--days", "19"]);

    let todo = fs::read_to_string(tmp.path().join("todo.txt")).unwrap();
    let recur = fs::read_to_string(tmp.path().join("recur.txt")).unwrap();

    assert_eq!(todo, "Water plants t:2015-01-01\nWater plants t:2015-01-15\n");
    assert_eq!(recur, "Water plants t:2015-01-29 rec:2w\n");
}

#[test]
fn test_recur_dry_run_leaves_files() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());
    let todo_before = fs::read_to_string(tmp.path().join("todo.txt")).unwrap();
    let recur_before = fs::read_to_string(tmp.path().join("recur.txt")).unwrap();

    let stdout = run_ag_ok(tmp.path(), &["recur", "--date", "2015-01-01", "--dry-run"]);

    assert!(stdout.contains("Water plants t:2015-01-01"));
    assert!(stdout.contains("would be added"));
    assert_eq!(
        fs::read_to_string(tmp.path().join("todo.txt")).unwrap(),
        todo_before
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("recur.txt")).unwrap(),
        recur_before
    );
}

#[test]
fn test_recur_json() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());

    let stdout = run_ag_ok(
        tmp.path(),
        &["recur", "--date", "2015-01-01", "--dry-run", "--json"],
    );
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["added"][0], "Water plants t:2015-01-01");
    assert_eq!(json["rescheduled"][0], "Water plants t:2015-01-15 rec:2w");
}

// ---------------------------------------------------------------------------
// Configuration and failure modes
// ---------------------------------------------------------------------------

#[test]
fn test_missing_todo_dir_fails() {
    let output = Command::new(ag_bin())
        .args(["agenda"])
        .env_remove("TODO_DIR")
        .output()
        .expect("failed to run ag");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("TODO_DIR"));
}

#[test]
fn test_todo_dir_flag_overrides_env() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());
    let bogus = TempDir::new().unwrap();

    let output = Command::new(ag_bin())
        .args(["agenda", "--date", "2015-01-01"])
        .arg("--todo-dir")
        .arg(tmp.path())
        .env("TODO_DIR", bogus.path())
        .output()
        .expect("failed to run ag");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Buy milk"));
}

#[test]
fn test_settings_file_changes_horizon() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());
    fs::write(tmp.path().join("agenda.toml"), "horizon_days = 2\n").unwrap();

    let stdout = run_ag_ok(tmp.path(), &["agenda", "--date", "2015-01-01"]);
    assert!(stdout.contains("Call mom"));
    assert!(!stdout.contains("Pay rent"));
}

#[test]
fn test_invalid_date_flag_fails() {
    let tmp = TempDir::new().unwrap();
    create_todo_dir(tmp.path());

    let (_, stderr, success) = run_ag(tmp.path(), &["agenda", "--date", "01/01/2015"]);
    assert!(!success);
    assert!(stderr.contains("invalid --date"));
}
