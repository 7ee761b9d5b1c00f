//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for the recent-cases listing. Clamped by
/// [`districtops_core::cases::clamp_recent_limit`].
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// `?q=` free-text search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Optional `?status=` filter for list endpoints.
#[derive(Debug, Deserialize)]
pub struct StatusFilter {
    pub status: Option<String>,
}
