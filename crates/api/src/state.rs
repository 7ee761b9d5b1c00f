use std::sync::Arc;

use crate::auth::session::SessionStore;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: districtops_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory bearer-token sessions.
    pub sessions: Arc<SessionStore>,
}
