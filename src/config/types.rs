//! Configuration data model.
//!
//! Struct definitions plus their defaults. Source discovery and precedence
//! live in `loader`/`sources`/`env`.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{DEFAULT_SERVICE_BASE_URL, DEFAULT_SERVICE_TIMEOUT_SECS};
use crate::joke::Category;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub widget: WidgetConfig,
    pub display: DisplayConfig,
}

/// Joke service connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Ask the service to filter unsafe content.
    pub safe_mode: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_BASE_URL.into(),
            timeout_secs: DEFAULT_SERVICE_TIMEOUT_SECS,
            safe_mode: true,
        }
    }
}

/// Widget behavior settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Category selected on startup.
    pub category: Category,
}

/// Terminal display settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Config plus the file it came from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}
