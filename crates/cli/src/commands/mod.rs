//! CLI command implementations.

pub mod query;
pub mod save_examples;

use anyhow::Result;
use nicosia_client::NicosiaClient;
use nicosia_config::Config;

/// Build a [`NicosiaClient`] from configuration.
///
/// Centralizes client construction so every command applies the same
/// connection settings and TLS policy.
pub(crate) fn build_client_from_config(config: &Config) -> Result<NicosiaClient> {
    Ok(NicosiaClient::builder().from_config(config).build()?)
}
