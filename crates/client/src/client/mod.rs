//! Main Smart Nicosia REST client and API methods.
//!
//! This module provides the primary [`NicosiaClient`] for querying the
//! Smart Nicosia backend.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `devices`: Tenant device listing
//! - `alarms`: Alarm queries
//! - `telemetry`: Telemetry and attribute queries
//! - `reports`: Traffic, general, and hourly report queries
//! - `catalog`: Object type and analytics catalogs
//!
//! # What this module does NOT handle:
//! - Query-string construction (delegated to [`crate::endpoints`])
//! - Example payload bundling (see [`crate::bundle`])
//!
//! # Invariants
//! - Every request is a GET carrying the configured `Accept` header.
//! - No retries and no local recovery: transport and API errors propagate
//!   to the caller unchanged.

pub mod builder;

// API method submodules
mod alarms;
mod catalog;
mod devices;
mod reports;
mod telemetry;

pub use telemetry::TelemetryRangeOptions;

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::endpoints::{Endpoint, QueryParams, build_query_url};
use crate::error::{ClientError, Result};

/// Smart Nicosia REST API client.
///
/// The client wraps a configured `reqwest::Client` and exposes one method
/// per backend endpoint, plus the raw [`get_text`](NicosiaClient::get_text)
/// and [`get_json`](NicosiaClient::get_json) fetchers for callers that
/// already hold a full URL.
///
/// # Creating a Client
///
/// Use [`NicosiaClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use nicosia_client::NicosiaClient;
///
/// let client = NicosiaClient::builder()
///     .api_root("https://nokia.smartnicosia.eu/backend/openapi".to_string())
///     .build()?;
/// ```
#[derive(Debug)]
pub struct NicosiaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_root: String,
    pub(crate) accept: String,
    pub(crate) timeout: Duration,
}

impl NicosiaClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing a [`NicosiaClient`].
    pub fn builder() -> builder::NicosiaClientBuilder {
        builder::NicosiaClientBuilder::new()
    }

    /// Get the API root the endpoint suffixes are resolved against.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Fetch a URL and return the raw response body.
    ///
    /// Issues a single GET with the configured `Accept` header. Non-2xx
    /// statuses become [`ClientError::ApiError`] with the response body as
    /// the message; transport failures are classified into timeout,
    /// connection, and TLS errors.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, &self.accept)
            .send()
            .await
            .map_err(|e| ClientError::from_request_error(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response body".to_string());
            return Err(ClientError::ApiError {
                status: status.as_u16(),
                url,
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::from_request_error(e, self.timeout))
    }

    /// Fetch a URL and decode the response body as JSON.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch an endpoint resolved against the client's API root.
    pub(crate) async fn get_endpoint(
        &self,
        endpoint: Endpoint,
        params: &QueryParams,
    ) -> Result<Value> {
        let url = build_query_url(&endpoint.url(&self.api_root), params);
        self.get_json(&url).await
    }
}
