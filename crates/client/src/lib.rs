//! Smart Nicosia REST API client.
//!
//! This crate provides a typed client for the Smart Nicosia municipal
//! IoT/telemetry backend. It covers the fixed catalog of query endpoints,
//! the example payload bundler, and the device listing deduplicator.

pub mod bundle;
pub mod client;
pub mod dedupe;
pub mod endpoints;
pub mod error;

pub use bundle::{
    ReportWindow, fetch_example_payloads, fetch_example_payloads_at, save_example_payloads,
};
pub use client::NicosiaClient;
pub use client::TelemetryRangeOptions;
pub use client::builder::NicosiaClientBuilder;
pub use dedupe::unique_by_device_type;
pub use error::{ClientError, Result};
