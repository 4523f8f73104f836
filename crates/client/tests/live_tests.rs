//! Live tests against the real Smart Nicosia backend.
//!
//! These tests require network access to the production backend (or a
//! staging root given via `NICOSIA_API_ROOT`) and are ignored by default.
//!
//! Run with: cargo test -p nicosia-client --test live_tests -- --ignored

use nicosia_client::NicosiaClient;
use nicosia_config::constants::DEFAULT_API_ROOT;
use nicosia_config::{ExampleDefaults, env_var_or_none};

/// Create a client for the live backend.
fn create_live_client() -> NicosiaClient {
    let api_root =
        env_var_or_none("NICOSIA_API_ROOT").unwrap_or_else(|| DEFAULT_API_ROOT.to_string());

    NicosiaClient::builder()
        .api_root(api_root)
        .build()
        .expect("Failed to create client")
}

#[tokio::test]
#[ignore = "requires the live Smart Nicosia backend"]
async fn test_live_object_types() {
    let client = create_live_client();
    let catalog = client
        .get_object_types()
        .await
        .expect("object type catalog should be reachable");

    assert!(catalog.is_array() || catalog.is_object());
}

#[tokio::test]
#[ignore = "requires the live Smart Nicosia backend"]
async fn test_live_tenant_devices() {
    let client = create_live_client();
    let devices = client
        .get_tenant_devices("TENANT", "CYTA")
        .await
        .expect("tenant device listing should be reachable");

    assert!(devices.is_array(), "expected a device list, got {devices}");
}

#[tokio::test]
#[ignore = "requires the live Smart Nicosia backend"]
async fn test_live_example_bundle() {
    let client = create_live_client();
    let bundle = nicosia_client::fetch_example_payloads(&client, &ExampleDefaults::default())
        .await
        .expect("full bundle should be reachable");

    assert_eq!(bundle.len(), 10);
}
