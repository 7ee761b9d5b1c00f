//! Dashboard statistics.

use serde::Serialize;
use sqlx::FromRow;

/// Headline counters for the command dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_personnel: i64,
    pub on_duty_personnel: i64,
    /// Cases that are `open` or `under_investigation`.
    pub active_cases: i64,
    pub pending_duties: i64,
    /// Alerts not yet marked read.
    pub active_alerts: i64,
}
