use serde::Deserialize;

/// Settings from an optional `agenda.toml` inside the todo directory.
/// Every field has a default, so a partial or absent file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How many days ahead of "now" count as due.
    pub horizon_days: u32,
    /// File that holds the active task list.
    pub todo_file: String,
    /// File that holds tasks scheduled for later.
    pub future_file: String,
    /// File that holds recurring task templates.
    pub recur_file: String,
    /// Leave blank placeholders where moved lines were, so the remaining
    /// lines keep their numbers.
    pub preserve_line_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            horizon_days: 10,
            todo_file: "todo.txt".to_string(),
            future_file: "future.txt".to_string(),
            recur_file: "recur.txt".to_string(),
            preserve_line_numbers: false,
        }
    }
}
