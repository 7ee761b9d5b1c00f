//! Handlers for the `/alerts` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use districtops_core::error::CoreError;
use districtops_core::types::DbId;
use districtops_db::models::alert::{Alert, CreateAlert, UpdateAlert};
use districtops_db::repositories::AlertRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::params::ApiPath;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Alert",
        id,
    })
}

/// GET /api/alerts
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Alert>>> {
    let alerts = AlertRepo::list(&state.pool).await?;
    Ok(Json(alerts))
}

/// GET /api/alerts/active
///
/// Unread alerts, newest first.
pub async fn list_active(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<Alert>>> {
    let alerts = AlertRepo::list_active(&state.pool).await?;
    Ok(Json(alerts))
}

/// GET /api/alerts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Alert>> {
    let alert = AlertRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(alert))
}

/// POST /api/alerts
///
/// `sentBy` defaults to the caller.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(mut input): ValidatedJson<CreateAlert>,
) -> AppResult<(StatusCode, Json<Alert>)> {
    input.sent_by.get_or_insert(auth.user_id);
    let alert = AlertRepo::create(&state.pool, &input).await?;
    tracing::info!(
        alert_id = alert.id,
        alert_type = %alert.alert_type,
        priority = %alert.priority,
        "Alert raised",
    );
    Ok((StatusCode::CREATED, Json(alert)))
}

/// PUT /api/alerts/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateAlert>,
) -> AppResult<Json<Alert>> {
    let alert = AlertRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(alert))
}

/// DELETE /api/alerts/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if AlertRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
