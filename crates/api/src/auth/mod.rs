//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- the in-memory bearer-token session store.

pub mod password;
pub mod session;
