//! Route definitions for the `/cases` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cases;
use crate::state::AppState;

/// Routes mounted at `/cases`.
///
/// ```text
/// GET    /           -> list (?status=)
/// POST   /           -> create
/// GET    /recent     -> recent (?limit=)
/// GET    /search     -> search (?q=)
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cases::list).post(cases::create))
        .route("/recent", get(cases::recent))
        .route("/search", get(cases::search))
        .route(
            "/{id}",
            get(cases::get_by_id)
                .put(cases::update)
                .delete(cases::delete),
        )
}
