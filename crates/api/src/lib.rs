//! DistrictOps API server library.
//!
//! Exposes the building blocks (config, state, session store, error
//! handling, routes) so integration tests and the binaries can share them.

pub mod auth;
pub mod background;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
