//! Common test utilities for integration tests.
//!
//! This module provides a shared client factory and re-exports commonly used
//! types for testing against a wiremock server.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use nicosia_client::NicosiaClient;

/// Build a client against a mock server.
///
/// The timeout is kept short so transport-failure tests finish quickly.
pub fn test_client(api_root: &str) -> NicosiaClient {
    NicosiaClient::builder()
        .api_root(api_root.to_string())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build against a mock server")
}
