use axum::routing::get;
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /active     -> list_active
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(alerts::list).post(alerts::create))
        .route("/active", get(alerts::list_active))
        .route(
            "/{id}",
            get(alerts::get_by_id)
                .put(alerts::update)
                .delete(alerts::delete),
        )
}
