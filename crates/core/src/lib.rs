//! Domain types, constants, and validators shared by the DistrictOps crates.
//!
//! This crate has no I/O. Everything here is pure data or pure functions so
//! the repository and HTTP layers can agree on the same vocabulary.

pub mod alerts;
pub mod cases;
pub mod communications;
pub mod duties;
pub mod error;
pub mod personnel;
pub mod priority;
pub mod roles;
pub mod types;
pub mod validation;
