//! Client builder for constructing [`NicosiaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (api_root)
//! - Normalizing the API root (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects, TLS policy)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`NicosiaClient`] methods in `mod.rs`)
//! - TLS policy precedence (decided by `TlsPolicy::from_flags` in the config crate)
//!
//! # Invariants
//! - `api_root` is a required field and must be provided before calling `build()`
//! - The API root is always normalized to have no trailing slashes
//! - `TlsPolicy::Insecure` only affects HTTPS connections; HTTP URLs log a warning
//! - A custom CA bundle is read and parsed at build time, so a bad path fails
//!   before any request is sent

use std::time::Duration;

use nicosia_config::constants::{DEFAULT_ACCEPT, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};
use nicosia_config::{Config, TlsPolicy};

use crate::client::NicosiaClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`NicosiaClient`].
///
/// This builder provides a fluent API for configuring the client before
/// instantiation. All configuration options have sensible defaults except
/// for `api_root`, which is required.
///
/// # Example
///
/// ```rust,ignore
/// use nicosia_client::NicosiaClient;
///
/// let client = NicosiaClient::builder()
///     .api_root("https://nokia.smartnicosia.eu/backend/openapi".to_string())
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct NicosiaClientBuilder {
    api_root: Option<String>,
    accept: String,
    timeout: Duration,
    tls: TlsPolicy,
}

impl Default for NicosiaClientBuilder {
    fn default() -> Self {
        Self {
            api_root: None,
            accept: DEFAULT_ACCEPT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            tls: TlsPolicy::Default,
        }
    }
}

impl NicosiaClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root the endpoint suffixes are resolved against.
    ///
    /// This should include the protocol and full backend path, e.g.
    /// `https://nokia.smartnicosia.eu/backend/openapi`. Trailing slashes
    /// will be automatically removed.
    pub fn api_root(mut self, url: String) -> Self {
        self.api_root = Some(url);
        self
    }

    /// Set the value sent in the HTTP `Accept` header.
    ///
    /// Default is `application/json`.
    pub fn accept(mut self, accept: String) -> Self {
        self.accept = accept;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds. The timeout covers the whole request, from
    /// connection to the last body byte.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the TLS verification policy.
    ///
    /// # Security Warning
    /// `TlsPolicy::Insecure` disables certificate and hostname verification,
    /// making the connection vulnerable to man-in-the-middle attacks. Only
    /// use it in development or testing environments.
    pub fn tls_policy(mut self, tls: TlsPolicy) -> Self {
        self.tls = tls;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// This method centralizes the conversion from config crate values to
    /// client settings, so every front end builds the client the same way.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.api_root = Some(config.connection.api_root.clone());
        self.accept = config.connection.accept.clone();
        self.timeout = config.connection.timeout;
        self.tls = config.connection.tls.clone();
        self
    }

    /// Normalize an API root by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint suffixes.
    fn normalize_api_root(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`NicosiaClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `api_root` was not provided.
    /// Returns [`ClientError::TlsError`] if a CA bundle cannot be read or parsed.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<NicosiaClient> {
        let api_root = self
            .api_root
            .ok_or_else(|| ClientError::InvalidUrl("api_root is required".to_string()))?;
        let api_root = Self::normalize_api_root(api_root);

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        match &self.tls {
            TlsPolicy::Insecure => {
                if api_root.starts_with("https://") {
                    http_builder = http_builder.danger_accept_invalid_certs(true);
                } else {
                    // Insecure mode only affects TLS certificate verification.
                    // It has no effect on HTTP connections since there is no TLS layer.
                    tracing::warn!(
                        "insecure mode has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                    );
                }
            }
            TlsPolicy::CustomCa { path } => {
                let pem = std::fs::read(path).map_err(|e| {
                    ClientError::TlsError(format!(
                        "failed to read CA bundle {}: {e}",
                        path.display()
                    ))
                })?;
                let certs = reqwest::Certificate::from_pem_bundle(&pem).map_err(|e| {
                    ClientError::TlsError(format!(
                        "failed to parse CA bundle {}: {e}",
                        path.display()
                    ))
                })?;
                for cert in certs {
                    http_builder = http_builder.add_root_certificate(cert);
                }
            }
            TlsPolicy::Default => {}
        }

        let http = http_builder.build()?;

        Ok(NicosiaClient {
            http,
            api_root,
            accept: self.accept,
            timeout: self.timeout,
        })
    }
}
