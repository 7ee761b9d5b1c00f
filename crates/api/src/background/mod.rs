//! Long-running background tasks spawned from `main`.

pub mod session_sweep;
