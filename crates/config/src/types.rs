//! Configuration types for the Smart Nicosia client.
//!
//! Responsibilities:
//! - Define connection settings (API root, Accept header, timeout, TLS policy).
//! - Define the example bundle defaults (tenant, devices, report shaping).
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env/.env files (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as seconds (floating point, so fractional
//!   timeouts survive a round-trip).
//! - Default values come from `constants`, not magic numbers.
//! - `TlsPolicy::from_flags` gives `Insecure` precedence over a CA file.

use crate::constants::{
    DEFAULT_ACCEPT, DEFAULT_ALARM_DEVICE_NAME, DEFAULT_API_ROOT, DEFAULT_DEVICE_NAME,
    DEFAULT_LINE_TYPE, DEFAULT_TENANT_NAME, DEFAULT_TIMEOUT_SECS, DEFAULT_TRAFFIC_GROUP_BY,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Module for serializing Duration as seconds (floating point).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs_f64().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

/// How the HTTP client verifies the backend's TLS certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TlsPolicy {
    /// Verify against the platform trust store.
    Default,
    /// Verify against a PEM CA bundle loaded from the given path.
    CustomCa { path: PathBuf },
    /// Skip certificate and hostname verification entirely.
    Insecure,
}

impl Default for TlsPolicy {
    fn default() -> Self {
        TlsPolicy::Default
    }
}

impl TlsPolicy {
    /// Derive the TLS policy from the insecure/CA-file flag pair.
    ///
    /// `insecure` wins when both are given: the connection skips verification
    /// and the CA file is ignored.
    pub fn from_flags(insecure: bool, cafile: Option<PathBuf>) -> Self {
        if insecure {
            TlsPolicy::Insecure
        } else if let Some(path) = cafile {
            TlsPolicy::CustomCa { path }
        } else {
            TlsPolicy::Default
        }
    }
}

/// Connection configuration for the Smart Nicosia backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// API root the endpoint suffixes are resolved against
    /// (e.g. https://nokia.smartnicosia.eu/backend/openapi)
    pub api_root: String,
    /// Value sent in the HTTP `Accept` header
    pub accept: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// TLS verification policy
    #[serde(default)]
    pub tls: TlsPolicy,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            tls: TlsPolicy::Default,
        }
    }
}

/// Entity names and report shaping used by the example payload bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleDefaults {
    /// Tenant queried for the device listing example
    pub tenant_name: String,
    /// Device queried for telemetry and attribute examples
    pub device_name: String,
    /// Device queried for alarm examples
    pub alarm_device_name: String,
    /// Grouping for traffic report examples
    pub traffic_group_by: String,
    /// Line type for general report examples
    pub line_type: String,
}

impl Default for ExampleDefaults {
    fn default() -> Self {
        Self {
            tenant_name: DEFAULT_TENANT_NAME.to_string(),
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            alarm_device_name: DEFAULT_ALARM_DEVICE_NAME.to_string(),
            traffic_group_by: DEFAULT_TRAFFIC_GROUP_BY.to_string(),
            line_type: DEFAULT_LINE_TYPE.to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Example bundle settings
    pub examples: ExampleDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.connection.api_root,
            "https://nokia.smartnicosia.eu/backend/openapi"
        );
        assert_eq!(config.connection.accept, "application/json");
        assert_eq!(config.connection.timeout, Duration::from_secs(30));
        assert_eq!(config.connection.tls, TlsPolicy::Default);
    }

    #[test]
    fn test_default_example_defaults() {
        let examples = ExampleDefaults::default();
        assert_eq!(examples.tenant_name, "CYTA");
        assert_eq!(examples.device_name, "YL1015");
        assert_eq!(examples.alarm_device_name, "YW1394");
        assert_eq!(examples.traffic_group_by, "day");
        assert_eq!(examples.line_type, "AVERAGE_SPEED");
    }

    #[test]
    fn test_tls_policy_insecure_wins_over_cafile() {
        let policy = TlsPolicy::from_flags(true, Some(PathBuf::from("/tmp/ca.pem")));
        assert_eq!(policy, TlsPolicy::Insecure);
    }

    #[test]
    fn test_tls_policy_cafile_alone() {
        let policy = TlsPolicy::from_flags(false, Some(PathBuf::from("/tmp/ca.pem")));
        assert_eq!(
            policy,
            TlsPolicy::CustomCa {
                path: PathBuf::from("/tmp/ca.pem")
            }
        );
    }

    #[test]
    fn test_tls_policy_no_flags() {
        let policy = TlsPolicy::from_flags(false, None);
        assert_eq!(policy, TlsPolicy::Default);
    }

    #[test]
    fn test_connection_config_serde_fractional_seconds() {
        let config = ConnectionConfig {
            api_root: "https://nokia.smartnicosia.eu/backend/openapi".to_string(),
            accept: "application/json".to_string(),
            timeout: Duration::from_secs_f64(12.5),
            tls: TlsPolicy::Insecure,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ConnectionConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.timeout, Duration::from_secs_f64(12.5));
        assert_eq!(deserialized.tls, TlsPolicy::Insecure);
    }

    #[test]
    fn test_connection_config_tls_defaults_when_absent() {
        let json =
            r#"{"api_root":"https://example.com","accept":"application/json","timeout":30.0}"#;
        let deserialized: ConnectionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(deserialized.tls, TlsPolicy::Default);
    }
}
