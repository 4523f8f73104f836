//! Report queries (traffic, general, hourly).

use serde_json::Value;
use tracing::debug;

use crate::endpoints::{GENERAL_REPORTS, HOURLY_REPORTS, QueryParams, TRAFFIC_REPORTS};
use crate::error::Result;

use super::NicosiaClient;

impl NicosiaClient {
    /// Fetch traffic reports over a time window.
    ///
    /// `va_ids` is a JSON-encoded list of virtual area ids; the literal `[]`
    /// means no filtering. The window bounds are epoch milliseconds, like
    /// the telemetry range.
    pub async fn get_traffic_reports(
        &self,
        va_ids: &str,
        group_by: &str,
        start_date: i64,
        end_date: i64,
    ) -> Result<Value> {
        debug!(va_ids, group_by, start_date, end_date, "fetching traffic reports");

        let params = QueryParams::new()
            .set("va_ids", va_ids)
            .set("group_by", group_by)
            .set("start_date", start_date)
            .set("end_date", end_date);

        self.get_endpoint(TRAFFIC_REPORTS, &params).await
    }

    /// Fetch general reports over a time window.
    ///
    /// The window bounds are epoch milliseconds.
    pub async fn get_general_reports(
        &self,
        group_by: &str,
        line_type: &str,
        start_date: i64,
        end_date: i64,
    ) -> Result<Value> {
        debug!(group_by, line_type, start_date, end_date, "fetching general reports");

        let params = QueryParams::new()
            .set("group_by", group_by)
            .set("line_type", line_type)
            .set("start_date", start_date)
            .set("end_date", end_date);

        self.get_endpoint(GENERAL_REPORTS, &params).await
    }

    /// Fetch hourly reports for an ISO-8601 week.
    ///
    /// `year` is the ISO week-based year, which can differ from the calendar
    /// year around January 1st.
    pub async fn get_hourly_reports(&self, week: u32, year: i32) -> Result<Value> {
        debug!(week, year, "fetching hourly reports");

        let params = QueryParams::new().set("week", week).set("year", year);

        self.get_endpoint(HOURLY_REPORTS, &params).await
    }
}
