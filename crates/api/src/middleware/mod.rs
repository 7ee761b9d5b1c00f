//! Request extractors that run before a handler body.
//!
//! - [`auth::AuthUser`] -- resolves the bearer session token to a user id.
//! - [`validated_json::ValidatedJson`] -- deserializes and validates a JSON body.
//! - [`params::ApiPath`] / [`params::ApiQuery`] -- path and query parameters
//!   with JSON rejections.

pub mod auth;
pub mod params;
pub mod validated_json;
