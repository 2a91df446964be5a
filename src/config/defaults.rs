//! Default configuration constants.
//!
//! Keeping defaults in one module lets loader, init and tests share the
//! same literals.

/// Directory name under the config root (`~/.config/jokebox`).
pub(super) const APP_DIR_NAME: &str = "jokebox";
/// Config file name, both local (`./jokebox.toml`) and global.
pub(super) const CONFIG_FILE_NAME: &str = "jokebox.toml";
/// Preference file holding the persisted theme.
pub(super) const PREFS_FILE_NAME: &str = "prefs.toml";
/// Log file written by the interactive mode.
pub(super) const LOG_FILE_NAME: &str = "jokebox.log";
/// Public joke API base URL.
pub(super) const DEFAULT_SERVICE_BASE_URL: &str = "https://v2.jokeapi.dev/joke";
/// Default timeout for joke requests.
pub(super) const DEFAULT_SERVICE_TIMEOUT_SECS: u64 = 10;
