//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`JOKEBOX_BASE_URL`, `JOKEBOX_TIMEOUT_SECS`,
//!    `JOKEBOX_CATEGORY`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./jokebox.toml in the current directory
//! 4. $XDG_CONFIG_HOME/jokebox/jokebox.toml (or ~/.config/jokebox/jokebox.toml)
//! 5. Built-in defaults
//!
//! The theme preference lives apart from config, in `prefs.toml` next to the
//! global config file; see [`prefs`].

mod defaults;
mod env;
mod init;
mod loader;
mod persist;
pub mod prefs;
mod sources;
mod types;

pub use init::{
    app_config_dir, config_root_dir, default_global_config_path, default_log_path,
    default_prefs_path,
};
pub use loader::{load_config, load_config_with_source};
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, THEME_KEY};
pub use types::{Config, DisplayConfig, LoadedConfig, ServiceConfig, WidgetConfig};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
