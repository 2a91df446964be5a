//! Preference-file persistence helpers.
//!
//! Writes touch a single top-level key and leave every other line of the
//! file as it was.

use std::path::Path;

use crate::error::ConfigError;

/// Persist `key = "value"` as a top-level entry of the TOML file at `path`.
pub(super) fn persist_top_level_value(
    path: &Path,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::Invalid(
            "preference key cannot be empty".to_string(),
        ));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let existing = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };
    let updated = upsert_top_level_value(&existing, key, value);
    std::fs::write(path, updated)?;
    Ok(())
}

/// Upsert a top-level string assignment while preserving unrelated contents.
///
/// Top-level keys must precede the first `[table]` header, so new entries
/// are inserted just above it.
fn upsert_top_level_value(input: &str, key: &str, value: &str) -> String {
    let mut lines = if input.is_empty() {
        Vec::new()
    } else {
        input.lines().map(str::to_string).collect::<Vec<_>>()
    };
    let assignment = format!("{key} = {}", toml::Value::String(value.to_string()));

    let first_table = lines
        .iter()
        .position(|line| is_table_header(line))
        .unwrap_or(lines.len());

    for idx in 0..first_table {
        if is_assignment_key(&lines[idx], key) {
            lines[idx] = assignment;
            return ensure_trailing_newline(lines.join("\n"));
        }
    }

    if first_table < lines.len() {
        lines.insert(first_table, assignment);
        if first_table + 1 < lines.len() && !lines[first_table + 1].trim().is_empty() {
            lines.insert(first_table + 1, String::new());
        }
    } else {
        lines.push(assignment);
    }
    ensure_trailing_newline(lines.join("\n"))
}

fn is_table_header(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// Return true when `line` assigns a value to `key` (e.g., `key = ...`).
fn is_assignment_key(line: &str, key: &str) -> bool {
    let trimmed = line.trim_start();
    let Some(rest) = trimmed.strip_prefix(key) else {
        return false;
    };
    rest.trim_start().starts_with('=')
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
