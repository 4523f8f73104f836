//! Centralized constants for the Smart Nicosia workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Backend Defaults
// =============================================================================

/// Default API root the endpoint suffixes are resolved against.
pub const DEFAULT_API_ROOT: &str = "https://nokia.smartnicosia.eu/backend/openapi";

/// Default URL for a single query (the tenant device listing).
pub const DEFAULT_QUERY_URL: &str =
    "https://nokia.smartnicosia.eu/backend/openapi/getTenantDevices";

/// Default value for the HTTP `Accept` header.
pub const DEFAULT_ACCEPT: &str = "application/json";

// =============================================================================
// Entity Defaults
// =============================================================================

/// Default entity type for single queries.
pub const DEFAULT_ENTITY_TYPE: &str = "TENANT";

/// Default entity name for single queries.
pub const DEFAULT_ENTITY_NAME: &str = "CYTA";

/// Entity type used when querying per-device endpoints.
pub const DEVICE_ENTITY_TYPE: &str = "DEVICE";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Example Bundle Defaults
// =============================================================================

/// Default tenant name queried for the device listing example.
pub const DEFAULT_TENANT_NAME: &str = "CYTA";

/// Default device name queried for telemetry and attribute examples.
pub const DEFAULT_DEVICE_NAME: &str = "YL1015";

/// Default device name queried for alarm examples.
pub const DEFAULT_ALARM_DEVICE_NAME: &str = "YW1394";

/// Default grouping for traffic report examples.
pub const DEFAULT_TRAFFIC_GROUP_BY: &str = "day";

/// Default line type for general report examples.
pub const DEFAULT_LINE_TYPE: &str = "AVERAGE_SPEED";

/// Grouping the general report example is always fetched with.
pub const GENERAL_REPORT_GROUP_BY: &str = "ONE_HOUR";

/// Virtual area filter the traffic report example is always fetched with
/// (the literal empty list, meaning no filtering).
pub const TRAFFIC_REPORT_VA_IDS: &str = "[]";

/// Maximum number of alarms fetched when no explicit limit is given.
pub const DEFAULT_ALARM_LIMIT: u32 = 10;
