//! Periodic purge of expired sessions.
//!
//! Expiry is otherwise lazy: an expired token is only dropped when a request
//! presents it. This loop bounds memory held by tokens that are never seen
//! again. Enabled by `SESSION_SWEEP_INTERVAL_SECS`.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::auth::session::SessionStore;

/// Run the sweep loop until `cancel` is triggered.
pub async fn run(sessions: Arc<SessionStore>, every: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = every.as_secs(), "Session sweep started");

    let mut interval = tokio::time::interval(every);
    // The first tick completes immediately; skip it so a fresh store is not swept.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session sweep stopping");
                break;
            }
            _ = interval.tick() => {
                let purged = sessions.purge_expired().await;
                if purged > 0 {
                    tracing::info!(purged, "Session sweep: dropped expired sessions");
                } else {
                    tracing::debug!("Session sweep: nothing to drop");
                }
            }
        }
    }
}
