//! Example payload bundling and persistence.
//!
//! Responsibilities:
//! - Fetch the fixed example bundle from the ten backend endpoints, in order.
//! - Compute the shared report window from a single clock read.
//! - Persist bundled payloads as pretty-printed JSON files.
//!
//! Does NOT handle:
//! - HTTP transport and error classification (see [`crate::client`]).
//! - Choice of tenant/device names (callers pass [`ExampleDefaults`]).
//!
//! Invariants:
//! - The clock is read exactly once per bundle; every time-derived parameter
//!   comes from that instant.
//! - Fetches run sequentially and fail fast: the first error aborts the rest.
//! - The output directory is created before any network traffic.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Duration, Utc};
use serde_json::Value;
use tracing::{debug, info};

use nicosia_config::ExampleDefaults;
use nicosia_config::constants::{
    DEFAULT_ENTITY_TYPE, GENERAL_REPORT_GROUP_BY, TRAFFIC_REPORT_VA_IDS,
};

use crate::client::{NicosiaClient, TelemetryRangeOptions};
use crate::endpoints::{
    ALARMS, ANALYTICS, GENERAL_REPORTS, HOURLY_REPORTS, LATEST_ATTRIBUTE, LATEST_TELEMETRY,
    OBJECT_TYPES, TELEMETRY_RANGE, TENANT_DEVICES, TRAFFIC_REPORTS,
};
use crate::error::{ClientError, Result};

/// Time window shared by the report examples, derived from one clock read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ReportWindow {
    /// The 24-hour window ending at `now`.
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        Self {
            start: now - Duration::days(1),
            end: now,
        }
    }

    /// Window start in epoch milliseconds.
    pub fn start_ms(&self) -> i64 {
        self.start.timestamp_millis()
    }

    /// Window end in epoch milliseconds.
    pub fn end_ms(&self) -> i64 {
        self.end.timestamp_millis()
    }

    /// ISO-8601 week number of the window end.
    pub fn week(&self) -> u32 {
        self.end.iso_week().week()
    }

    /// ISO-8601 week-based year of the window end.
    ///
    /// Differs from the calendar year around January 1st.
    pub fn year(&self) -> i32 {
        self.end.iso_week().year()
    }
}

/// Fetch the full example bundle using the current time.
///
/// Reads the clock once and delegates to [`fetch_example_payloads_at`].
pub async fn fetch_example_payloads(
    client: &NicosiaClient,
    defaults: &ExampleDefaults,
) -> Result<Vec<(&'static str, Value)>> {
    fetch_example_payloads_at(client, defaults, Utc::now()).await
}

/// Fetch the full example bundle with an explicit clock reading.
///
/// The ten endpoints are fetched sequentially in a fixed order and the first
/// failure aborts the rest. Labels are the endpoint suffixes. All
/// time-derived parameters (telemetry range, report window, ISO week) come
/// from `now`.
pub async fn fetch_example_payloads_at(
    client: &NicosiaClient,
    defaults: &ExampleDefaults,
    now: DateTime<Utc>,
) -> Result<Vec<(&'static str, Value)>> {
    let window = ReportWindow::ending_at(now);
    debug!(
        start_ms = window.start_ms(),
        end_ms = window.end_ms(),
        week = window.week(),
        year = window.year(),
        "example bundle window"
    );

    let mut bundle = Vec::with_capacity(10);

    bundle.push((
        TENANT_DEVICES.label(),
        client
            .get_tenant_devices(DEFAULT_ENTITY_TYPE, &defaults.tenant_name)
            .await?,
    ));
    bundle.push((
        LATEST_TELEMETRY.label(),
        client
            .get_latest_telemetry(None, &defaults.device_name, None)
            .await?,
    ));
    bundle.push((
        LATEST_ATTRIBUTE.label(),
        client
            .get_latest_attribute(None, &defaults.device_name)
            .await?,
    ));
    bundle.push((
        TELEMETRY_RANGE.label(),
        client
            .get_telemetry_range(
                None,
                &defaults.device_name,
                window.start_ms(),
                window.end_ms(),
                &TelemetryRangeOptions::default(),
            )
            .await?,
    ));
    bundle.push((
        ALARMS.label(),
        client
            .get_alarms(None, &defaults.alarm_device_name, None, None)
            .await?,
    ));
    bundle.push((OBJECT_TYPES.label(), client.get_object_types().await?));
    bundle.push((ANALYTICS.label(), client.get_analytics().await?));
    bundle.push((
        TRAFFIC_REPORTS.label(),
        client
            .get_traffic_reports(
                TRAFFIC_REPORT_VA_IDS,
                &defaults.traffic_group_by,
                window.start_ms(),
                window.end_ms(),
            )
            .await?,
    ));
    bundle.push((
        GENERAL_REPORTS.label(),
        client
            .get_general_reports(
                GENERAL_REPORT_GROUP_BY,
                &defaults.line_type,
                window.start_ms(),
                window.end_ms(),
            )
            .await?,
    ));
    bundle.push((
        HOURLY_REPORTS.label(),
        client.get_hourly_reports(window.week(), window.year()).await?,
    ));

    Ok(bundle)
}

/// Fetch the example bundle and write each payload to `<dir>/<label>.json`.
///
/// The directory (and any missing parents) is created before the first
/// request goes out, so an unusable output path fails without network
/// traffic. Files are pretty-printed with 2-space indentation. Returns the
/// written `(label, path)` pairs in bundle order.
pub async fn save_example_payloads(
    client: &NicosiaClient,
    defaults: &ExampleDefaults,
    dir: &Path,
) -> Result<Vec<(&'static str, PathBuf)>> {
    std::fs::create_dir_all(dir).map_err(|source| ClientError::Filesystem {
        path: dir.to_path_buf(),
        source,
    })?;

    let bundle = fetch_example_payloads(client, defaults).await?;

    let mut written = Vec::with_capacity(bundle.len());
    for (label, payload) in bundle {
        let path = dir.join(format!("{label}.json"));
        let pretty = serde_json::to_string_pretty(&payload)?;
        std::fs::write(&path, pretty).map_err(|source| ClientError::Filesystem {
            path: path.clone(),
            source,
        })?;
        info!(label, path = %path.display(), "wrote example payload");
        written.push((label, path));
    }

    Ok(written)
}
