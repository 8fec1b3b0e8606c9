use std::fs;
use std::path::{Path, PathBuf};

use crate::model::settings::Settings;

/// Name of the optional settings file inside the todo directory.
pub const SETTINGS_FILE: &str = "agenda.toml";

/// Error type for settings loading
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse agenda.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Load settings from `<todo_dir>/agenda.toml`. A missing file yields the
/// defaults; a malformed one is an error rather than a silent fallback.
pub fn load_settings(todo_dir: &Path) -> Result<Settings, SettingsError> {
    let path = todo_dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| SettingsError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let settings: Settings = toml::from_str(&text)?;
    Ok(settings)
}
