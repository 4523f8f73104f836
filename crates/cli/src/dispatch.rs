//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the single-query or save-examples path.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use nicosia_config::Config;

use crate::args::Cli;
use crate::commands;

/// Dispatch the parsed CLI invocation to its handler.
///
/// `--save-examples DIR` switches the tool into bundle mode; everything else
/// is a single query against the configured base URL.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    if let Some(ref dir) = cli.save_examples {
        commands::save_examples::run(config, dir).await
    } else {
        commands::query::run(
            config,
            cli.base_url.as_deref(),
            &cli.entity_type,
            &cli.entity_name,
            cli.unique_device_type,
            cli.pretty,
        )
        .await
    }
}
