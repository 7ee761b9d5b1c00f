//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement for operations with no resource to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
