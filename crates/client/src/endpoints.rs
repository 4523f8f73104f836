//! Endpoint catalog and query-string construction.
//!
//! This module provides the fixed set of backend endpoints and the helpers
//! that shape query strings for them.
//!
//! # What this module handles:
//! - The endpoint catalog (the URL suffix doubles as the bundle label)
//! - Query parameter normalization (absent values dropped, present values
//!   stringified, insertion order preserved)
//! - Final request URL assembly
//!
//! # What this module does NOT handle:
//! - Sending requests (see [`crate::client`])
//! - Choosing parameter values (see the client methods and [`crate::bundle`])
//!
//! # Invariants
//! - Encoding follows the application/x-www-form-urlencoded profile (space
//!   becomes `+`, reserved characters are percent-escaped).
//! - The `?` separator is always appended, even with no parameters. Every
//!   capture of backend traffic carries it, so request URLs stay comparable
//!   with the historical ones.

use url::form_urlencoded;

/// A fixed backend endpoint, addressed by the suffix appended to the API root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    suffix: &'static str,
}

impl Endpoint {
    /// URL suffix relative to the API root.
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Label used for bundled example payloads (same as the suffix).
    pub fn label(&self) -> &'static str {
        self.suffix
    }

    /// Resolve this endpoint against an API root.
    pub fn url(&self, api_root: &str) -> String {
        format!("{}/{}", api_root.trim_end_matches('/'), self.suffix)
    }
}

/// Tenant device listing.
pub const TENANT_DEVICES: Endpoint = Endpoint {
    suffix: "getTenantDevices",
};

/// Latest telemetry values for an entity.
pub const LATEST_TELEMETRY: Endpoint = Endpoint {
    suffix: "getLatestTelemetry",
};

/// Latest attribute values for an entity.
pub const LATEST_ATTRIBUTE: Endpoint = Endpoint {
    suffix: "getLatestAttribute",
};

/// Telemetry over an explicit time range.
pub const TELEMETRY_RANGE: Endpoint = Endpoint {
    suffix: "getTelemetryRange",
};

/// Alarms for an entity.
pub const ALARMS: Endpoint = Endpoint {
    suffix: "getAlarms",
};

/// Object type catalog.
pub const OBJECT_TYPES: Endpoint = Endpoint {
    suffix: "object_types",
};

/// Analytics catalog.
pub const ANALYTICS: Endpoint = Endpoint {
    suffix: "analytics",
};

/// Traffic reports over a date window.
pub const TRAFFIC_REPORTS: Endpoint = Endpoint {
    suffix: "getTrafficReports",
};

/// General reports over a date window.
pub const GENERAL_REPORTS: Endpoint = Endpoint {
    suffix: "generalReports",
};

/// Hourly reports for an ISO week.
pub const HOURLY_REPORTS: Endpoint = Endpoint {
    suffix: "hourlyReports",
};

/// Insertion-ordered query parameters with absent values dropped.
///
/// Values are stringified through `Display`, so an integer limit of `10`
/// ends up as `"10"` on the wire. Keys are never inserted with empty
/// placeholder values; an absent optional simply does not appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, stringifying the value.
    pub fn set(mut self, key: &str, value: impl std::fmt::Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Insert a parameter only when the value is present.
    pub fn set_opt(mut self, key: &str, value: Option<impl std::fmt::Display>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// The normalized pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Encode as an application/x-www-form-urlencoded query string.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Build the final request URL from a base URL and query parameters.
///
/// The `?` separator is appended even when `params` is empty, matching the
/// URL shape the backend has always been called with.
pub fn build_query_url(base: &str, params: &QueryParams) -> String {
    format!("{}?{}", base, params.encode())
}
