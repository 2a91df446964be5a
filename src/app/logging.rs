//! `tracing` subscriber setup.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use jokebox::config::default_log_path;
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter directive.
const LOG_FILTER_ENV: &str = "JOKEBOX_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogTarget {
    /// Plain stderr, for non-interactive runs.
    Stderr,
    /// Append to the jokebox log file so the full-screen card stays intact.
    File,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Failures are reported and otherwise ignored.
pub(crate) fn init_logging(target: LogTarget) {
    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File => match open_log_file() {
            Some(file) => tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init(),
            None => tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::sink)
                .try_init(),
        },
    };
    if let Err(err) = result {
        eprintln!("warning: failed to initialize logging: {err}");
    }
}

fn open_log_file() -> Option<fs::File> {
    let path = default_log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
