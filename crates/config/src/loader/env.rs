//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `NICOSIA_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            // Trimming was needed, allocate new String
            Some(trimmed.to_string())
        }
    })
}

/// Parse a timeout given in (possibly fractional) seconds.
fn parse_timeout(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: f64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a number of seconds".to_string(),
    })?;
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a non-negative, finite number of seconds".to_string(),
    })
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over built-in defaults; builder
/// methods applied afterwards take precedence over environment variables.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(root) = env_var_or_none("NICOSIA_API_ROOT") {
        loader.set_api_root(Some(root));
    }
    if let Some(accept) = env_var_or_none("NICOSIA_ACCEPT") {
        loader.set_accept(Some(accept));
    }
    if let Some(timeout) = env_var_or_none("NICOSIA_TIMEOUT") {
        loader.set_timeout(Some(parse_timeout("NICOSIA_TIMEOUT", &timeout)?));
    }
    if let Some(insecure) = env_var_or_none("NICOSIA_INSECURE") {
        loader.set_insecure(Some(insecure.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: "NICOSIA_INSECURE".to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(cafile) = env_var_or_none("NICOSIA_CAFILE") {
        loader.set_cafile(Some(PathBuf::from(cafile)));
    }
    if let Some(tenant) = env_var_or_none("NICOSIA_TENANT") {
        loader.set_tenant_name(Some(tenant));
    }
    if let Some(device) = env_var_or_none("NICOSIA_DEVICE") {
        loader.set_device_name(Some(device));
    }
    if let Some(device) = env_var_or_none("NICOSIA_ALARM_DEVICE") {
        loader.set_alarm_device_name(Some(device));
    }
    if let Some(group_by) = env_var_or_none("NICOSIA_TRAFFIC_GROUP_BY") {
        loader.set_traffic_group_by(Some(group_by));
    }
    if let Some(line_type) = env_var_or_none("NICOSIA_LINE_TYPE") {
        loader.set_line_type(Some(line_type));
    }
    Ok(())
}
