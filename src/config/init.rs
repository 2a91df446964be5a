//! Config-path helpers.

use std::path::PathBuf;

use super::defaults::{APP_DIR_NAME, CONFIG_FILE_NAME, LOG_FILE_NAME, PREFS_FILE_NAME};

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

/// Per-user jokebox directory (`~/.config/jokebox`).
pub fn app_config_dir() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Default per-user config path (`~/.config/jokebox/jokebox.toml`).
pub fn default_global_config_path() -> Option<PathBuf> {
    app_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Default preference file path (`~/.config/jokebox/prefs.toml`).
pub fn default_prefs_path() -> Option<PathBuf> {
    app_config_dir().map(|dir| dir.join(PREFS_FILE_NAME))
}

/// Default interactive log path (`~/.config/jokebox/jokebox.log`).
pub fn default_log_path() -> Option<PathBuf> {
    app_config_dir().map(|dir| dir.join(LOG_FILE_NAME))
}
