//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables and direct builder methods.
//! - Build the final `Config` from loaded values, validating as it goes.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_ACCEPT, DEFAULT_ALARM_DEVICE_NAME, DEFAULT_API_ROOT, DEFAULT_DEVICE_NAME,
    DEFAULT_LINE_TYPE, DEFAULT_TENANT_NAME, DEFAULT_TIMEOUT_SECS, DEFAULT_TRAFFIC_GROUP_BY,
    MAX_TIMEOUT_SECS,
};
use crate::types::{Config, ConnectionConfig, ExampleDefaults, TlsPolicy};

/// Configuration loader that builds config from environment variables and
/// builder overrides.
pub struct ConfigLoader {
    api_root: Option<String>,
    accept: Option<String>,
    timeout: Option<Duration>,
    insecure: Option<bool>,
    cafile: Option<PathBuf>,
    tenant_name: Option<String>,
    device_name: Option<String>,
    alarm_device_name: Option<String>,
    traffic_group_by: Option<String>,
    line_type: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            api_root: None,
            accept: None,
            timeout: None,
            insecure: None,
            cafile: None,
            tenant_name: None,
            device_name: None,
            alarm_device_name: None,
            traffic_group_by: None,
            line_type: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from `NICOSIA_*` environment variables.
    ///
    /// Environment variables take precedence over built-in defaults.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API root the endpoint suffixes are resolved against.
    pub fn with_api_root(mut self, root: String) -> Self {
        self.api_root = Some(root);
        self
    }

    /// Set the HTTP `Accept` header value.
    pub fn with_accept(mut self, accept: String) -> Self {
        self.accept = Some(accept);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = Some(insecure);
        self
    }

    /// Set the PEM CA bundle path used for TLS verification.
    pub fn with_cafile(mut self, path: PathBuf) -> Self {
        self.cafile = Some(path);
        self
    }

    /// Set the tenant name used by the example bundle.
    pub fn with_tenant_name(mut self, name: String) -> Self {
        self.tenant_name = Some(name);
        self
    }

    /// Set the device name used for telemetry and attribute examples.
    pub fn with_device_name(mut self, name: String) -> Self {
        self.device_name = Some(name);
        self
    }

    /// Set the device name used for alarm examples.
    pub fn with_alarm_device_name(mut self, name: String) -> Self {
        self.alarm_device_name = Some(name);
        self
    }

    /// Set the grouping used for traffic report examples.
    pub fn with_traffic_group_by(mut self, group_by: String) -> Self {
        self.traffic_group_by = Some(group_by);
        self
    }

    /// Set the line type used for general report examples.
    pub fn with_line_type(mut self, line_type: String) -> Self {
        self.line_type = Some(line_type);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_root =
            validate_and_normalize_api_root(self.api_root.as_deref().unwrap_or(DEFAULT_API_ROOT))?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::validate_timeout(timeout)?;

        let connection = ConnectionConfig {
            api_root,
            accept: self.accept.unwrap_or_else(|| DEFAULT_ACCEPT.to_string()),
            timeout,
            tls: TlsPolicy::from_flags(self.insecure.unwrap_or(false), self.cafile),
        };

        let examples = ExampleDefaults {
            tenant_name: self
                .tenant_name
                .unwrap_or_else(|| DEFAULT_TENANT_NAME.to_string()),
            device_name: self
                .device_name
                .unwrap_or_else(|| DEFAULT_DEVICE_NAME.to_string()),
            alarm_device_name: self
                .alarm_device_name
                .unwrap_or_else(|| DEFAULT_ALARM_DEVICE_NAME.to_string()),
            traffic_group_by: self
                .traffic_group_by
                .unwrap_or_else(|| DEFAULT_TRAFFIC_GROUP_BY.to_string()),
            line_type: self
                .line_type
                .unwrap_or_else(|| DEFAULT_LINE_TYPE.to_string()),
        };

        tracing::debug!(api_root = %connection.api_root, "configuration assembled");

        Ok(Config {
            connection,
            examples,
        })
    }

    /// Validates the request timeout.
    ///
    /// Checks:
    /// - timeout is greater than 0
    /// - timeout does not exceed MAX_TIMEOUT_SECS
    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout > Duration::from_secs(MAX_TIMEOUT_SECS) {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn set_api_root(&mut self, root: Option<String>) {
        self.api_root = root;
    }

    pub(crate) fn set_accept(&mut self, accept: Option<String>) {
        self.accept = accept;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_insecure(&mut self, insecure: Option<bool>) {
        self.insecure = insecure;
    }

    pub(crate) fn set_cafile(&mut self, cafile: Option<PathBuf>) {
        self.cafile = cafile;
    }

    pub(crate) fn set_tenant_name(&mut self, name: Option<String>) {
        self.tenant_name = name;
    }

    pub(crate) fn set_device_name(&mut self, name: Option<String>) {
        self.device_name = name;
    }

    pub(crate) fn set_alarm_device_name(&mut self, name: Option<String>) {
        self.alarm_device_name = name;
    }

    pub(crate) fn set_traffic_group_by(&mut self, group_by: Option<String>) {
        self.traffic_group_by = group_by;
    }

    pub(crate) fn set_line_type(&mut self, line_type: Option<String>) {
        self.line_type = line_type;
    }
}

/// Validates and normalizes an API root URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing (returns Err(ConfigError::MissingApiRoot))
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
fn validate_and_normalize_api_root(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingApiRoot);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "api_root".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://nokia.smartnicosia.eu/backend/openapi): {e}"
        ),
    })?;

    // Validate scheme is http or https
    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "api_root".into(),
            message: format!(
                "scheme must be http or https (e.g. https://nokia.smartnicosia.eu/backend/openapi), got: {scheme}"
            ),
        });
    }

    // Validate host is present
    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "api_root".into(),
            message: "host is required (e.g. https://nokia.smartnicosia.eu/backend/openapi)".into(),
        });
    }

    // Normalize: strip trailing slash
    let normalized = parsed.as_str().trim_end_matches('/').to_string();

    Ok(normalized)
}
