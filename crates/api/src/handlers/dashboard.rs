//! Handler for the `/dashboard` summary.

use axum::extract::State;
use axum::Json;
use districtops_db::models::dashboard::DashboardStats;
use districtops_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
