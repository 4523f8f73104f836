//! Catalog queries (object types, analytics).

use serde_json::Value;
use tracing::debug;

use crate::endpoints::{ANALYTICS, OBJECT_TYPES, QueryParams};
use crate::error::Result;

use super::NicosiaClient;

impl NicosiaClient {
    /// Fetch the object type catalog.
    ///
    /// Takes no parameters; the request still carries the bare `?` like
    /// every other backend call.
    pub async fn get_object_types(&self) -> Result<Value> {
        debug!("fetching object types");

        self.get_endpoint(OBJECT_TYPES, &QueryParams::new()).await
    }

    /// Fetch the analytics catalog.
    pub async fn get_analytics(&self) -> Result<Value> {
        debug!("fetching analytics");

        self.get_endpoint(ANALYTICS, &QueryParams::new()).await
    }
}
