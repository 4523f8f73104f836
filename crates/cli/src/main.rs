//! Smart Nicosia CLI - Command-line client for the Smart Nicosia backend.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run a single query against a backend endpoint, or fetch and persist the
//!   example payload bundle.
//! - Print JSON responses (compact or pretty) to stdout.
//!
//! Does NOT handle:
//! - HTTP transport, parameter shaping, or bundling (see `crates/client`).
//! - Configuration precedence rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap
//!   env-var defaults.
//! - Configuration errors exit with the general error code before any request
//!   is sent.

mod args;
mod commands;
mod dispatch;
mod error;

use std::time::Duration;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use nicosia_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            // Print the error message
            eprintln!("{:#}", e);

            // Return structured exit code
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Assemble the configuration from environment variables and CLI overrides.
///
/// Precedence (lowest to highest): built-in defaults, `NICOSIA_*` environment
/// variables, CLI flags. Flags that clap already filled from the environment
/// simply re-apply the same value on top.
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref accept) = cli.accept {
        loader = loader.with_accept(accept.clone());
    }
    if let Some(secs) = cli.timeout {
        let timeout = Duration::try_from_secs_f64(secs).map_err(|_| {
            anyhow::anyhow!("invalid --timeout: must be a non-negative number of seconds")
        })?;
        loader = loader.with_timeout(timeout);
    }
    if cli.insecure {
        loader = loader.with_insecure(true);
    }
    if let Some(ref path) = cli.cafile {
        loader = loader.with_cafile(path.clone());
    }

    Ok(loader.build()?)
}
