//! Handlers for the `/personnel` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use districtops_core::error::CoreError;
use districtops_core::types::DbId;
use districtops_db::models::duty::Duty;
use districtops_db::models::personnel::{
    CreatePersonnel, DutyStatusUpdate, Personnel, UpdatePersonnel,
};
use districtops_db::repositories::{DutyRepo, PersonnelRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::params::ApiPath;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Personnel",
        id,
    })
}

/// GET /api/personnel
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<Personnel>>> {
    let personnel = PersonnelRepo::list(&state.pool).await?;
    Ok(Json(personnel))
}

/// GET /api/personnel/on-duty
pub async fn list_on_duty(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<Personnel>>> {
    let personnel = PersonnelRepo::list_on_duty(&state.pool).await?;
    Ok(Json(personnel))
}

/// GET /api/personnel/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Personnel>> {
    let officer = PersonnelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(officer))
}

/// POST /api/personnel
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<CreatePersonnel>,
) -> AppResult<(StatusCode, Json<Personnel>)> {
    let officer = PersonnelRepo::create(&state.pool, &input).await?;
    tracing::info!(
        personnel_id = officer.id,
        badge = %officer.badge_number,
        by = auth.user_id,
        "Personnel created",
    );
    Ok((StatusCode::CREATED, Json(officer)))
}

/// PUT /api/personnel/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePersonnel>,
) -> AppResult<Json<Personnel>> {
    let officer = PersonnelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(officer))
}

/// PUT /api/personnel/{id}/duty-status
///
/// Set the on-duty flag and current location together.
pub async fn update_duty_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<DutyStatusUpdate>,
) -> AppResult<Json<Personnel>> {
    let officer = PersonnelRepo::update_duty_status(
        &state.pool,
        id,
        input.is_on_duty,
        input.location.as_deref(),
    )
    .await?
    .ok_or_else(|| not_found(id))?;
    tracing::info!(
        personnel_id = id,
        on_duty = officer.is_on_duty,
        "Duty status changed"
    );
    Ok(Json(officer))
}

/// DELETE /api/personnel/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if PersonnelRepo::delete(&state.pool, id).await? {
        tracing::info!(personnel_id = id, by = auth.user_id, "Personnel deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /api/personnel/{id}/duties
///
/// Duties assigned to one officer. An unknown officer yields an empty list.
pub async fn list_duties(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Vec<Duty>>> {
    let duties = DutyRepo::list_by_personnel(&state.pool, id).await?;
    Ok(Json(duties))
}
