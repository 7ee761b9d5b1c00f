//! Request handlers for the district records API.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `districtops_db` and
//! map errors via [`AppError`](crate::error::AppError). Every entity handler
//! takes an [`AuthUser`](crate::middleware::auth::AuthUser), so unauthenticated
//! requests are rejected before any store access.

pub mod alerts;
pub mod auth;
pub mod cases;
pub mod communications;
pub mod dashboard;
pub mod duties;
pub mod personnel;
