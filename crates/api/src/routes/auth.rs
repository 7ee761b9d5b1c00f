use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST   /login      -> login
/// POST   /signup     -> signup
/// POST   /logout     -> logout
/// GET    /user       -> current_user
/// PUT    /profile    -> update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::current_user))
        .route("/profile", put(auth::update_profile))
}
