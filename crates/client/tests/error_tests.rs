//! Error classification tests.
//!
//! These tests verify that transport and API failures surface as the right
//! `ClientError` variant, with enough context (status, URL, body) for the
//! caller to act on.
//!
//! # Invariants
//! - Non-2xx responses become `ApiError` carrying status, URL, and body.
//! - Timeouts report the configured timeout, not the elapsed time.
//! - Connection and TLS failures are connection-class errors.

mod common;

use std::time::Duration;

use common::*;
use nicosia_client::{ClientError, NicosiaClient};
use serde_json::json;

#[tokio::test]
async fn test_not_found_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getTenantDevices"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such endpoint"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_tenant_devices("TENANT", "CYTA")
        .await
        .unwrap_err();

    match err {
        ClientError::ApiError {
            status,
            url,
            message,
        } => {
            assert_eq!(status, 404);
            assert!(url.contains("/getTenantDevices?entityType=TENANT&entityName=CYTA"));
            assert_eq!(message, "no such endpoint");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_body_is_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics"))
        .respond_with(
            ResponseTemplate::new(502).set_body_json(json!({"error": "upstream unreachable"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_analytics().await.unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 502);
            assert!(message.contains("upstream unreachable"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_reports_configured_duration() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/object_types"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = NicosiaClient::builder()
        .api_root(server.uri())
        .timeout(Duration::from_millis(250))
        .build()
        .unwrap();

    let err = client.get_object_types().await.unwrap_err();

    match err {
        ClientError::Timeout(timeout) => assert_eq!(timeout, Duration::from_millis(250)),
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_connection_class() {
    // Port 1 is reserved and closed on any sane host.
    let client = test_client("http://127.0.0.1:1");

    let err = client.get_object_types().await.unwrap_err();

    assert!(err.is_connection_error(), "got {err:?}");
    assert!(matches!(err, ClientError::ConnectionRefused(_)));
}

#[tokio::test]
async fn test_invalid_json_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/object_types"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login page</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_object_types().await.unwrap_err();

    assert!(matches!(err, ClientError::Json(_)), "got {err:?}");
    assert!(!err.is_connection_error());
}

#[tokio::test]
async fn test_get_text_returns_non_json_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getTenantDevices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Service under maintenance"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let url = format!("{}/getTenantDevices?", server.uri());
    let body = client.get_text(&url).await.unwrap();

    assert_eq!(body, "Service under maintenance");
}
