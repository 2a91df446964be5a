//! Environment overrides.
//!
//! `JOKEBOX_*` variables take precedence over every config file.

use crate::error::ConfigError;
use crate::joke::Category;

use super::Config;

pub(super) const ENV_BASE_URL: &str = "JOKEBOX_BASE_URL";
pub(super) const ENV_TIMEOUT_SECS: &str = "JOKEBOX_TIMEOUT_SECS";
pub(super) const ENV_CATEGORY: &str = "JOKEBOX_CATEGORY";

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(env_lookup, ENV_BASE_URL) {
        config.service.base_url = url;
    }
    if let Some(timeout) = non_empty(env_lookup, ENV_TIMEOUT_SECS) {
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_TIMEOUT_SECS} value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        // Clamp to at least 1 second to avoid accidental "no timeout".
        config.service.timeout_secs = parsed.max(1);
    }
    if let Some(category) = non_empty(env_lookup, ENV_CATEGORY) {
        config.widget.category = category
            .parse::<Category>()
            .map_err(|msg| ConfigError::Invalid(format!("{ENV_CATEGORY}: {msg}")))?;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
