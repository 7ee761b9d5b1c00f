//! Route definitions for the `/personnel` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::personnel;
use crate::state::AppState;

/// Routes mounted at `/personnel`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /on-duty            -> list_on_duty
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// PUT    /{id}/duty-status   -> update_duty_status
/// GET    /{id}/duties        -> list_duties
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(personnel::list).post(personnel::create))
        .route("/on-duty", get(personnel::list_on_duty))
        .route(
            "/{id}",
            get(personnel::get_by_id)
                .put(personnel::update)
                .delete(personnel::delete),
        )
        .route("/{id}/duty-status", put(personnel::update_duty_status))
        .route("/{id}/duties", get(personnel::list_duties))
}
