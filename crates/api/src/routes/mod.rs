pub mod alerts;
pub mod auth;
pub mod cases;
pub mod communications;
pub mod dashboard;
pub mod duties;
pub mod health;
pub mod personnel;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/signup                                     signup (public)
/// /auth/logout                                     logout (public, revokes bearer token if any)
/// /auth/user                                       current user (requires auth)
/// /auth/profile                                    update own profile (requires auth)
///
/// /personnel                                       list, create
/// /personnel/on-duty                               officers currently on duty
/// /personnel/{id}                                  get, update, delete
/// /personnel/{id}/duty-status                      set on-duty flag + location (PUT)
/// /personnel/{id}/duties                           duties assigned to officer
///
/// /cases                                           list (?status=), create
/// /cases/recent                                    newest first (?limit=)
/// /cases/search                                    free-text search (?q=)
/// /cases/{id}                                      get, update, delete
///
/// /duties                                          list, create
/// /duties/pending                                  pending duties by start time
/// /duties/{id}                                     get, update, delete
///
/// /alerts                                          list, create
/// /alerts/active                                   unread alerts
/// /alerts/{id}                                     get, update, delete
///
/// /communications                                  list, create
/// /communications/{id}                             get, update, delete
///
/// /dashboard/stats                                 summary counters
/// ```
///
/// Everything except `/auth/login`, `/auth/signup` and `/auth/logout`
/// requires `Authorization: Bearer <token>`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/personnel", personnel::router())
        .nest("/cases", cases::router())
        .nest("/duties", duties::router())
        .nest("/alerts", alerts::router())
        .nest("/communications", communications::router())
        .nest("/dashboard", dashboard::router())
}
