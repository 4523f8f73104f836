//! Shared test utilities for nicosia-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear every `NICOSIA_*` variable so host environments cannot leak in.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;

/// Every environment variable the CLI or the config loader reads.
const NICOSIA_VARS: [&str; 13] = [
    "NICOSIA_API_ROOT",
    "NICOSIA_BASE_URL",
    "NICOSIA_ENTITY_TYPE",
    "NICOSIA_ENTITY_NAME",
    "NICOSIA_ACCEPT",
    "NICOSIA_TIMEOUT",
    "NICOSIA_INSECURE",
    "NICOSIA_CAFILE",
    "NICOSIA_TENANT",
    "NICOSIA_DEVICE",
    "NICOSIA_ALARM_DEVICE",
    "NICOSIA_TRAFFIC_GROUP_BY",
    "NICOSIA_LINE_TYPE",
];

/// Returns a hermetic `nicosia-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - All `NICOSIA_*` variables are cleared to ensure no leakage from the host.
pub fn nicosia_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("nicosia-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    for var in NICOSIA_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic `nicosia-cli` command with a specific base URL.
///
/// This is a convenience wrapper around `nicosia_cmd()` that sets
/// `NICOSIA_BASE_URL` to the provided value. All other hermeticity
/// guarantees (DOTENV_DISABLED=1, cleared env vars) are preserved.
#[allow(dead_code)]
pub fn nicosia_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = nicosia_cmd();
    cmd.env("NICOSIA_BASE_URL", base_url);
    cmd
}
