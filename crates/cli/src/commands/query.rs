//! Single-URL query command implementation.

use anyhow::Result;
use serde_json::Value;
use tracing::info;

use nicosia_client::endpoints::{QueryParams, build_query_url};
use nicosia_client::unique_by_device_type;
use nicosia_config::Config;
use nicosia_config::constants::DEFAULT_QUERY_URL;

/// Query one backend URL and print the response body to stdout.
///
/// The entity parameters are appended to `base_url` (the device listing
/// endpoint when none is given). A body that does not parse as JSON is
/// printed verbatim; this keeps maintenance pages and proxy interstitials
/// visible instead of turning them into decode errors.
pub async fn run(
    config: Config,
    base_url: Option<&str>,
    entity_type: &str,
    entity_name: &str,
    unique_device_type: bool,
    pretty: bool,
) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;

    let base = base_url.unwrap_or(DEFAULT_QUERY_URL);
    let params = QueryParams::new()
        .set("entityType", entity_type)
        .set("entityName", entity_name);
    let url = build_query_url(base, &params);

    info!(%url, "querying backend");
    let body = client.get_text(&url).await?;

    // Non-JSON bodies pass through untouched.
    let Ok(mut value) = serde_json::from_str::<Value>(&body) else {
        println!("{body}");
        return Ok(());
    };

    if unique_device_type {
        if let Value::Array(items) = &value {
            value = Value::Array(unique_by_device_type(items));
        }
    }

    if pretty {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{value}");
    }

    Ok(())
}
