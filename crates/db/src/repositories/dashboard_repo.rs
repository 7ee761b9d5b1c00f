//! Read-only aggregate counts for the command dashboard.

use districtops_core::cases::ACTIVE_STATUSES;
use districtops_core::duties::STATUS_PENDING;
use sqlx::PgPool;

use crate::models::dashboard::DashboardStats;

/// Provides the dashboard counters.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute all dashboard counters in a single round trip.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let active_statuses: Vec<String> = ACTIVE_STATUSES.iter().map(|s| s.to_string()).collect();
        sqlx::query_as::<_, DashboardStats>(
            "SELECT
                (SELECT COUNT(*) FROM personnel) AS total_personnel,
                (SELECT COUNT(*) FROM personnel WHERE is_on_duty = true) AS on_duty_personnel,
                (SELECT COUNT(*) FROM cases WHERE status = ANY($1)) AS active_cases,
                (SELECT COUNT(*) FROM duties WHERE status = $2) AS pending_duties,
                (SELECT COUNT(*) FROM alerts WHERE is_read = false) AS active_alerts",
        )
        .bind(active_statuses)
        .bind(STATUS_PENDING)
        .fetch_one(pool)
        .await
    }
}
