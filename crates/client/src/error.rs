//! Error types for the Smart Nicosia client.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Smart Nicosia client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from the backend.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// TLS/SSL error.
    #[error("TLS error: {0}")]
    TlsError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Response body was not valid JSON.
    #[error("Failed to decode JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem operation failed while persisting payloads.
    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Classify a transport error from reqwest into a more specific variant.
    ///
    /// `timeout` is the configured request timeout, reported back in
    /// [`ClientError::Timeout`] so the operator can see what was exceeded.
    pub(crate) fn from_request_error(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            return Self::Timeout(timeout);
        }
        // TLS failures surface as connect errors too, so sniff them first.
        if is_tls_failure(&err) {
            return Self::TlsError(err.to_string());
        }
        if err.is_connect() {
            let target = err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "unknown host".to_string());
            return Self::ConnectionRefused(target);
        }
        Self::HttpError(err)
    }

    /// Check if this error is a connection-class failure (timeout, refused,
    /// DNS, TLS, unusable URL).
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::ConnectionRefused(_) | Self::TlsError(_) | Self::InvalidUrl(_)
        )
    }
}

/// Walk the error chain looking for TLS/certificate failures.
fn is_tls_failure(err: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string().to_lowercase();
        if text.contains("certificate") || text.contains("tls") || text.contains("handshake") {
            return true;
        }
        source = cause.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_class_errors() {
        assert!(ClientError::Timeout(Duration::from_secs(1)).is_connection_error());
        assert!(ClientError::ConnectionRefused("https://localhost:1/".to_string())
            .is_connection_error());
        assert!(ClientError::TlsError("cert error".to_string()).is_connection_error());
        assert!(ClientError::InvalidUrl("not a url".to_string()).is_connection_error());
    }

    #[test]
    fn test_api_error_is_not_connection_class() {
        let err = ClientError::ApiError {
            status: 500,
            url: "https://example.com/?".to_string(),
            message: "boom".to_string(),
        };
        assert!(!err.is_connection_error());
    }

    #[test]
    fn test_json_error_is_not_connection_class() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ClientError::Json(_)));
        assert!(!err.is_connection_error());
    }
}
