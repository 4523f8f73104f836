//! Example bundle command implementation.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use nicosia_client::save_example_payloads;
use nicosia_config::Config;

/// Fetch the example bundle and write one JSON file per endpoint.
///
/// Prints a `<label>: <path>` line for each file written, in bundle order.
pub async fn run(config: Config, dir: &Path) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;

    info!(dir = %dir.display(), "saving example payloads");
    let written = save_example_payloads(&client, &config.examples, dir).await?;

    for (label, path) in written {
        println!("{label}: {}", path.display());
    }

    Ok(())
}
