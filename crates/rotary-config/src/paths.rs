//! Platform-specific paths for panel configuration.
//!
//! # Directory Structure
//!
//! - **User config**: `~/.config/rotary/` (Linux), `~/Library/Application Support/rotary/` (macOS), `%APPDATA%\rotary\` (Windows)
//! - **Default panel**: `<user config>/panel.toml`

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Application name used for directory paths.
const APP_NAME: &str = "rotary";

/// File name of the default panel.
const PANEL_FILE: &str = "panel.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the panel loaded when none is given explicitly.
pub fn default_panel_path() -> PathBuf {
    user_config_dir().join(PANEL_FILE)
}

/// Ensure the user config directory exists, returning its path.
pub fn ensure_user_config_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_config_dir();
    ensure_dir(&dir)?;
    Ok(dir)
}

fn ensure_dir(dir: &Path) -> Result<(), ConfigError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::create_dir(dir, e))?;
    }
    Ok(())
}

/// Pick the panel file to load.
///
/// An explicit path always wins. Otherwise the default panel path is used
/// when that file exists. `None` means "use the built-in demo panel".
pub fn resolve_panel_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let default = default_panel_path();
    default.is_file().then_some(default)
}
