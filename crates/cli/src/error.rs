//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 is left to clap for usage errors and never produced here.

use nicosia_client::ClientError;

/// Structured exit codes for nicosia-cli.
///
/// These codes enable scripts to distinguish between different failure modes
/// and take appropriate action (retry, fix input, fail fast, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure, including filesystem
    /// and JSON serialization problems.
    GeneralError = 1,

    /// Connection error - network, timeout, DNS, or TLS failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// HTTP 404 from the backend.
    ///
    /// Scripts should verify the endpoint path and entity identifiers.
    NotFound = 4,

    /// HTTP 5xx from the backend.
    ///
    /// Scripts should back off and retry later.
    ServerError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    /// Map ClientError variants to structured exit codes.
    fn from(err: &ClientError) -> Self {
        match err {
            // Connection-class failures (exit code 3)
            ClientError::ConnectionRefused(_) => ExitCode::ConnectionError,
            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::TlsError(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            // Backend status codes (exit codes 4 and 5)
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError {
                status: 500..=599, ..
            } => ExitCode::ServerError,
            ClientError::ApiError { .. } => ExitCode::GeneralError,

            // HttpError - check if it's a connection/timeout error
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            // Decode and persistence failures (exit code 1)
            ClientError::Json(_) => ExitCode::GeneralError,
            ClientError::Filesystem { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
///
/// This trait provides a convenient way to get the appropriate exit code
/// from any anyhow error, handling both ClientError and other error types.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if the error is not a ClientError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        // Try to find ClientError anywhere in the chain
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }

        // Default to general error
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://nokia.smartnicosia.eu/backend/openapi/getTenantDevices?".to_string(),
            message: "error body".to_string(),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConnectionError.as_i32(), 3);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::ServerError.as_i32(), 5);
    }

    #[test]
    fn test_connection_class_maps_to_3() {
        assert_eq!(
            ExitCode::from(&ClientError::ConnectionRefused(
                "https://localhost:1/".to_string()
            )),
            ExitCode::ConnectionError
        );
        assert_eq!(
            ExitCode::from(&ClientError::Timeout(Duration::from_secs(30))),
            ExitCode::ConnectionError
        );
        assert_eq!(
            ExitCode::from(&ClientError::TlsError("bad certificate".to_string())),
            ExitCode::ConnectionError
        );
        assert_eq!(
            ExitCode::from(&ClientError::InvalidUrl("not a url".to_string())),
            ExitCode::ConnectionError
        );
    }

    #[test]
    fn test_not_found_maps_to_4() {
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
    }

    #[test]
    fn test_server_errors_map_to_5() {
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::ServerError);
        assert_eq!(ExitCode::from(&api_error(502)), ExitCode::ServerError);
        assert_eq!(ExitCode::from(&api_error(503)), ExitCode::ServerError);
    }

    #[test]
    fn test_other_api_errors_map_to_1() {
        assert_eq!(ExitCode::from(&api_error(400)), ExitCode::GeneralError);
        assert_eq!(ExitCode::from(&api_error(401)), ExitCode::GeneralError);
        assert_eq!(ExitCode::from(&api_error(403)), ExitCode::GeneralError);
    }

    #[test]
    fn test_json_error_maps_to_1() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert_eq!(ExitCode::from(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_exit_code_ext_finds_client_error_in_chain() {
        let client_err = ClientError::Timeout(Duration::from_secs(5));
        let wrapped = anyhow::Error::from(client_err).context("while querying the backend");
        assert_eq!(wrapped.exit_code(), ExitCode::ConnectionError);
    }

    #[test]
    fn test_exit_code_ext_defaults_to_general_error() {
        let err = anyhow::anyhow!("something unrelated");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
