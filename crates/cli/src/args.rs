//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build configuration (see `main` and the config crate).

use clap::Parser;
use nicosia_config::constants::{DEFAULT_ENTITY_NAME, DEFAULT_ENTITY_TYPE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nicosia-cli")]
#[command(about = "Query the Smart Nicosia IoT backend from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  nicosia-cli\n  nicosia-cli --entity-type TENANT --entity-name CYTA --pretty\n  nicosia-cli --unique-device-type\n  nicosia-cli --insecure --save-examples docs/examples\n"
)]
pub struct Cli {
    /// Full URL queried in single-query mode (defaults to the tenant device
    /// listing endpoint)
    #[arg(short, long, env = "NICOSIA_BASE_URL")]
    pub base_url: Option<String>,

    /// Entity type sent with the single query
    #[arg(long, env = "NICOSIA_ENTITY_TYPE", default_value = DEFAULT_ENTITY_TYPE)]
    pub entity_type: String,

    /// Entity name sent with the single query
    #[arg(long, env = "NICOSIA_ENTITY_NAME", default_value = DEFAULT_ENTITY_NAME)]
    pub entity_name: String,

    /// Value sent in the HTTP Accept header
    #[arg(long, env = "NICOSIA_ACCEPT")]
    pub accept: Option<String>,

    /// Request timeout in seconds (fractional values allowed)
    #[arg(long, env = "NICOSIA_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Pretty-print the JSON response
    #[arg(long)]
    pub pretty: bool,

    /// Keep one device per distinct device_type when the response is a list
    #[arg(long)]
    pub unique_device_type: bool,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, env = "NICOSIA_INSECURE")]
    pub insecure: bool,

    /// Path to a PEM CA bundle used to verify the backend certificate
    #[arg(long, env = "NICOSIA_CAFILE", value_name = "FILE")]
    pub cafile: Option<PathBuf>,

    /// Fetch the example payload bundle and write one JSON file per endpoint
    /// into this directory
    #[arg(long, value_name = "DIR")]
    pub save_examples: Option<PathBuf>,
}
