//! Alarm queries.

use nicosia_config::constants::{DEFAULT_ALARM_LIMIT, DEVICE_ENTITY_TYPE};
use serde_json::Value;
use tracing::debug;

use crate::endpoints::{ALARMS, QueryParams};
use crate::error::Result;

use super::NicosiaClient;

impl NicosiaClient {
    /// Fetch alarms raised for an entity.
    ///
    /// `entity_type` defaults to `DEVICE` and `limit` to 10 when omitted.
    /// `state` (e.g. `ACTIVE`) is only sent when given.
    pub async fn get_alarms(
        &self,
        entity_type: Option<&str>,
        entity_name: &str,
        limit: Option<u32>,
        state: Option<&str>,
    ) -> Result<Value> {
        let entity_type = entity_type.unwrap_or(DEVICE_ENTITY_TYPE);
        let limit = limit.unwrap_or(DEFAULT_ALARM_LIMIT);

        debug!(entity_type, entity_name, limit, "fetching alarms");

        let params = QueryParams::new()
            .set("entityType", entity_type)
            .set("entityName", entity_name)
            .set("limit", limit)
            .set_opt("state", state);

        self.get_endpoint(ALARMS, &params).await
    }
}
