//! Handlers for the `/communications` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use districtops_core::error::CoreError;
use districtops_core::types::DbId;
use districtops_db::models::communication::{
    Communication, CreateCommunication, UpdateCommunication,
};
use districtops_db::repositories::CommunicationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::params::ApiPath;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Communication",
        id,
    })
}

/// GET /api/communications
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<Communication>>> {
    let communications = CommunicationRepo::list(&state.pool).await?;
    Ok(Json(communications))
}

/// GET /api/communications/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Communication>> {
    let communication = CommunicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(communication))
}

/// POST /api/communications
///
/// `sender` defaults to the caller. Messages are recorded, not delivered.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(mut input): ValidatedJson<CreateCommunication>,
) -> AppResult<(StatusCode, Json<Communication>)> {
    input.sender.get_or_insert(auth.user_id);
    let communication = CommunicationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        communication_id = communication.id,
        comm_type = %communication.comm_type,
        "Communication recorded",
    );
    Ok((StatusCode::CREATED, Json(communication)))
}

/// PUT /api/communications/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCommunication>,
) -> AppResult<Json<Communication>> {
    let communication = CommunicationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(communication))
}

/// DELETE /api/communications/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if CommunicationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
