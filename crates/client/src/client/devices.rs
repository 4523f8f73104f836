//! Tenant device queries.

use serde_json::Value;
use tracing::debug;

use crate::endpoints::{QueryParams, TENANT_DEVICES};
use crate::error::Result;

use super::NicosiaClient;

impl NicosiaClient {
    /// List the devices registered under an entity.
    ///
    /// Both `entity_type` and `entity_name` are required by the backend;
    /// the usual pairing is `TENANT` with a tenant name such as `CYTA`.
    pub async fn get_tenant_devices(&self, entity_type: &str, entity_name: &str) -> Result<Value> {
        debug!(entity_type, entity_name, "listing tenant devices");

        let params = QueryParams::new()
            .set("entityType", entity_type)
            .set("entityName", entity_name);

        self.get_endpoint(TENANT_DEVICES, &params).await
    }
}
