use axum::routing::get;
use axum::Router;

use crate::handlers::duties;
use crate::state::AppState;

/// Routes mounted at `/duties`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /pending    -> list_pending
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(duties::list).post(duties::create))
        .route("/pending", get(duties::list_pending))
        .route(
            "/{id}",
            get(duties::get_by_id)
                .put(duties::update)
                .delete(duties::delete),
        )
}
