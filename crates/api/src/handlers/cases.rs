//! Handlers for the `/cases` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use districtops_core::cases::{clamp_recent_limit, validate_case_status};
use districtops_core::error::CoreError;
use districtops_core::types::DbId;
use districtops_db::models::case::{Case, CreateCase, UpdateCase};
use districtops_db::repositories::CaseRepo;
use validator::ValidationErrors;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::params::{ApiPath, ApiQuery};
use crate::middleware::validated_json::ValidatedJson;
use crate::query::{LimitParams, SearchParams, StatusFilter};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Case", id })
}

/// GET /api/cases[?status=]
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiQuery(filter): ApiQuery<StatusFilter>,
) -> AppResult<Json<Vec<Case>>> {
    let cases = match filter.status.as_deref() {
        Some(status) => {
            if let Err(e) = validate_case_status(status) {
                let mut errors = ValidationErrors::new();
                errors.add("status", e);
                return Err(AppError::Validation(errors));
            }
            CaseRepo::list_by_status(&state.pool, status).await?
        }
        None => CaseRepo::list(&state.pool).await?,
    };
    Ok(Json(cases))
}

/// GET /api/cases/recent[?limit=]
pub async fn recent(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> AppResult<Json<Vec<Case>>> {
    let limit = clamp_recent_limit(params.limit);
    let cases = CaseRepo::list_recent(&state.pool, limit).await?;
    Ok(Json(cases))
}

/// GET /api/cases/search?q=
///
/// Case-insensitive substring match over case number, title, and description.
pub async fn search(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> AppResult<Json<Vec<Case>>> {
    let cases = CaseRepo::search(&state.pool, params.q.trim()).await?;
    Ok(Json(cases))
}

/// GET /api/cases/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Case>> {
    let case = CaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(case))
}

/// POST /api/cases
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateCase>,
) -> AppResult<(StatusCode, Json<Case>)> {
    let case = CaseRepo::create(&state.pool, &input).await?;
    tracing::info!(
        case_id = case.id,
        case_number = %case.case_number,
        by = auth.user_id,
        "Case opened",
    );
    Ok((StatusCode::CREATED, Json(case)))
}

/// PUT /api/cases/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCase>,
) -> AppResult<Json<Case>> {
    let case = CaseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(case))
}

/// DELETE /api/cases/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if CaseRepo::delete(&state.pool, id).await? {
        tracing::info!(case_id = id, by = auth.user_id, "Case deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
