use axum::routing::get;
use axum::Router;

use crate::handlers::communications;
use crate::state::AppState;

/// Routes mounted at `/communications`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(communications::list).post(communications::create))
        .route(
            "/{id}",
            get(communications::get_by_id)
                .put(communications::update)
                .delete(communications::delete),
        )
}
