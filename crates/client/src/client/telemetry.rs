//! Telemetry and attribute queries.

use nicosia_config::constants::DEVICE_ENTITY_TYPE;
use serde_json::Value;
use tracing::debug;

use crate::endpoints::{LATEST_ATTRIBUTE, LATEST_TELEMETRY, QueryParams, TELEMETRY_RANGE};
use crate::error::Result;

use super::NicosiaClient;

/// Optional parameters for [`NicosiaClient::get_telemetry_range`].
///
/// `username` and `password` are forwarded to the backend for that one call
/// only; the client never stores them.
#[derive(Debug, Clone, Default)]
pub struct TelemetryRangeOptions {
    /// Comma-separated telemetry keys to restrict the result to.
    pub keys: Option<String>,
    /// Username forwarded with the request.
    pub username: Option<String>,
    /// Password forwarded with the request.
    pub password: Option<String>,
}

impl NicosiaClient {
    /// Fetch the latest telemetry values for an entity.
    ///
    /// `entity_type` defaults to `DEVICE`. `keys` is a comma-separated list
    /// and only sent when given, otherwise the backend returns all keys.
    pub async fn get_latest_telemetry(
        &self,
        entity_type: Option<&str>,
        entity_name: &str,
        keys: Option<&str>,
    ) -> Result<Value> {
        let entity_type = entity_type.unwrap_or(DEVICE_ENTITY_TYPE);

        debug!(entity_type, entity_name, "fetching latest telemetry");

        let params = QueryParams::new()
            .set("entityType", entity_type)
            .set("entityName", entity_name)
            .set_opt("keys", keys);

        self.get_endpoint(LATEST_TELEMETRY, &params).await
    }

    /// Fetch the latest attribute values for an entity.
    ///
    /// `entity_type` defaults to `DEVICE`.
    pub async fn get_latest_attribute(
        &self,
        entity_type: Option<&str>,
        entity_name: &str,
    ) -> Result<Value> {
        let entity_type = entity_type.unwrap_or(DEVICE_ENTITY_TYPE);

        debug!(entity_type, entity_name, "fetching latest attributes");

        let params = QueryParams::new()
            .set("entityType", entity_type)
            .set("entityName", entity_name);

        self.get_endpoint(LATEST_ATTRIBUTE, &params).await
    }

    /// Fetch telemetry between two timestamps (epoch milliseconds).
    ///
    /// `entity_type` defaults to `DEVICE`. The optional keys/username/password
    /// parameters follow the two timestamps on the wire.
    pub async fn get_telemetry_range(
        &self,
        entity_type: Option<&str>,
        entity_name: &str,
        start_ts: i64,
        end_ts: i64,
        options: &TelemetryRangeOptions,
    ) -> Result<Value> {
        let entity_type = entity_type.unwrap_or(DEVICE_ENTITY_TYPE);

        debug!(
            entity_type,
            entity_name, start_ts, end_ts, "fetching telemetry range"
        );

        let params = QueryParams::new()
            .set("entityType", entity_type)
            .set("entityName", entity_name)
            .set("startTs", start_ts)
            .set("endTs", end_ts)
            .set_opt("keys", options.keys.as_deref())
            .set_opt("username", options.username.as_deref())
            .set_opt("password", options.password.as_deref());

        self.get_endpoint(TELEMETRY_RANGE, &params).await
    }
}
