//! Persisted user preferences.
//!
//! The widget only stores the active theme, under [`THEME_KEY`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::debug;

use super::init::default_prefs_path;
use super::persist::persist_top_level_value;
use crate::error::ConfigError;

/// Key holding the theme preference (`"dark"` or `"light"`).
pub const THEME_KEY: &str = "theme";

/// Key-value string store that survives across sessions.
pub trait PreferenceStore {
    /// Stored value for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;
}

/// Preference store backed by a small TOML file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.config/jokebox/prefs.toml`.
    pub fn open_default() -> Result<Self, ConfigError> {
        default_prefs_path().map(Self::new).ok_or_else(|| {
            ConfigError::Invalid("unable to resolve default preference file path".to_string())
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let text = std::fs::read_to_string(&self.path).ok()?;
        let table = match text.parse::<toml::Table>() {
            Ok(table) => table,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "ignoring unreadable preference file");
                return None;
            }
        };
        table.get(key)?.as_str().map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        persist_top_level_value(&self.path, key, value)
    }
}

/// In-memory store; clones share the same values.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| ConfigError::Invalid("preference store lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
