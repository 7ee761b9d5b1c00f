//! Handlers for the `/auth` resource (login, signup, current user, logout, profile).

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use districtops_core::error::CoreError;
use districtops_core::roles::{validate_role, DEFAULT_ROLE};
use districtops_db::models::user::{CreateUser, UpdateProfile, UserResponse};
use districtops_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{bearer_token, AuthUser};
use crate::middleware::validated_json::ValidatedJson;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 2))]
    pub first_name: String,
    #[validate(length(min = 2))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    /// Defaults to `personnel` when omitted.
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
}

/// Request body for `PUT /auth/profile`. All fields optional.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    #[validate(length(min = 2))]
    pub first_name: Option<String>,
    #[validate(length(min = 2))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub profile_image_url: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub session_id: String,
    pub user: UserResponse,
}

/// Successful signup response.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns a session token and the user.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let Some(user) = UserRepo::find_by_email(&state.pool, &input.email).await? else {
        tracing::warn!("Login rejected: unknown email");
        return Err(AppError::Core(CoreError::InvalidCredentials));
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(user_id = user.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::InvalidCredentials));
    }

    let session_id = state.sessions.create(user.id).await;
    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        session_id,
        user: user.into(),
    }))
}

/// POST /api/auth/signup
///
/// Register a new user. Returns 409 if the email is already taken.
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "User already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        password_hash,
        role: input.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
    };
    // A concurrent signup for the same email loses on `uq_users_email` (409).
    let user = UserRepo::create(&state.pool, &create).await?;
    tracing::info!(user_id = user.id, role = %user.role, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse { user: user.into() }),
    ))
}

/// GET /api/auth/user
///
/// The authenticated user's own record.
pub async fn current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(Json(user.into()))
}

/// POST /api/auth/logout
///
/// Revoke the presented session, if any. Always succeeds.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<MessageResponse> {
    if let Some(token) = bearer_token(&headers) {
        if state.sessions.revoke(token).await {
            tracing::info!("Session revoked");
        }
    }
    Json(MessageResponse {
        message: "Logged out successfully",
    })
}

/// PUT /api/auth/profile
///
/// Update the caller's name, email, or profile image.
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<ProfileRequest>,
) -> AppResult<Json<UserResponse>> {
    let update = UpdateProfile {
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        profile_image_url: input.profile_image_url,
    };
    let user = UserRepo::update_profile(&state.pool, auth_user.user_id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    tracing::info!(user_id = user.id, "Profile updated");
    Ok(Json(user.into()))
}
