//! Handlers for the `/duties` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use districtops_core::duties::validate_duty_window;
use districtops_core::error::CoreError;
use districtops_core::types::DbId;
use districtops_db::models::duty::{CreateDuty, Duty, UpdateDuty};
use districtops_db::repositories::DutyRepo;
use validator::ValidationErrors;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::params::ApiPath;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Duty", id })
}

/// GET /api/duties
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Duty>>> {
    let duties = DutyRepo::list(&state.pool).await?;
    Ok(Json(duties))
}

/// GET /api/duties/pending
pub async fn list_pending(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<Duty>>> {
    let duties = DutyRepo::list_pending(&state.pool).await?;
    Ok(Json(duties))
}

/// GET /api/duties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Duty>> {
    let duty = DutyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(duty))
}

/// POST /api/duties
///
/// `createdBy` defaults to the caller.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(mut input): ValidatedJson<CreateDuty>,
) -> AppResult<(StatusCode, Json<Duty>)> {
    input.created_by.get_or_insert(auth.user_id);
    let duty = DutyRepo::create(&state.pool, &input).await?;
    tracing::info!(duty_id = duty.id, assigned_to = ?duty.assigned_to, "Duty scheduled");
    Ok((StatusCode::CREATED, Json(duty)))
}

/// PUT /api/duties/{id}
///
/// When only one end of the window moves, the new window is checked against
/// the stored other end.
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDuty>,
) -> AppResult<Json<Duty>> {
    if input.start_time.is_some() != input.end_time.is_some() {
        let current = DutyRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let start = input.start_time.unwrap_or(current.start_time);
        let end = input.end_time.unwrap_or(current.end_time);
        if let Err(e) = validate_duty_window(start, end) {
            let mut errors = ValidationErrors::new();
            errors.add("__all__", e);
            return Err(AppError::Validation(errors));
        }
    }

    let duty = DutyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(duty))
}

/// DELETE /api/duties/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if DutyRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
