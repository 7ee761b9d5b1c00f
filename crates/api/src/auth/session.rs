//! In-memory bearer-token session store.
//!
//! Tokens are opaque random strings mapped to a user id and an absolute
//! expiry. Entries live only as long as the process. Expiry is lazy: an
//! expired entry is dropped the first time it is presented to
//! [`SessionStore::resolve`]. [`SessionStore::purge_expired`] exists for the
//! optional background sweep.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use districtops_core::types::{DbId, Timestamp};
use rand::Rng;
use tokio::sync::RwLock;

/// Length of a generated session token (alphanumeric characters).
///
/// 48 characters drawn from 62 symbols carry roughly 285 bits of entropy.
pub const TOKEN_LENGTH: usize = 48;

/// A live session.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Session {
    fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}

/// Process-wide map from session token to [`Session`].
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared through the application state.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: chrono::Duration,
}

impl SessionStore {
    /// Create an empty store whose sessions live for `ttl`.
    pub fn new(ttl: chrono::Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Issue a new token bound to `user_id`, expiring `ttl` from now.
    ///
    /// An expiry past the largest representable timestamp is clamped to it.
    ///
    /// A generated token that is already in use is discarded and a new one
    /// drawn; an existing session is never overwritten.
    pub async fn create(&self, user_id: DbId) -> String {
        let now = Utc::now();
        let session = Session {
            user_id,
            created_at: now,
            expires_at: now
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };

        let mut sessions = self.sessions.write().await;
        let token = loop {
            let candidate = generate_token();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
            tracing::warn!("Session token collision, regenerating");
        };
        sessions.insert(token.clone(), session);
        tracing::debug!(user_id, active = sessions.len(), "Session created");
        token
    }

    /// Look up the user bound to `token`.
    ///
    /// Returns `None` for unknown tokens. An expired entry is removed and
    /// reported as `None`.
    pub async fn resolve(&self, token: &str) -> Option<DbId> {
        let now = Utc::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                None => return None,
                Some(session) if !session.is_expired_at(now) => return Some(session.user_id),
                Some(_) => {}
            }
        }

        let mut sessions = self.sessions.write().await;
        if sessions
            .get(token)
            .is_some_and(|session| session.is_expired_at(now))
        {
            if let Some(session) = sessions.remove(token) {
                tracing::debug!(user_id = session.user_id, "Expired session dropped");
            }
        }
        None
    }

    /// Remove `token`. Revoking an unknown token is a no-op.
    ///
    /// Returns `true` if an entry was removed.
    pub async fn revoke(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Remove every expired entry. Returns the number removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        before - sessions.len()
    }

    /// Number of entries currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// Draw a fresh token from the thread-local CSPRNG.
fn generate_token() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn week_store() -> SessionStore {
        SessionStore::new(chrono::Duration::days(7))
    }

    /// A store whose sessions are already expired when issued.
    fn expired_store() -> SessionStore {
        SessionStore::new(chrono::Duration::zero())
    }

    #[tokio::test]
    async fn created_token_resolves_to_user() {
        let store = week_store();
        let token = store.create(42).await;
        assert_eq!(store.resolve(&token).await, Some(42));
        // Resolving does not consume the session.
        assert_eq!(store.resolve(&token).await, Some(42));
    }

    #[tokio::test]
    async fn unknown_token_is_absent() {
        let store = week_store();
        store.create(1).await;
        assert_eq!(store.resolve("never-issued").await, None);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn tokens_are_long_and_alphanumeric() {
        let store = week_store();
        let token = store.create(1).await;
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn tokens_are_distinct_per_login() {
        let store = week_store();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            assert!(seen.insert(store.create(7).await));
        }
        assert_eq!(store.len().await, 200);
    }

    #[tokio::test]
    async fn expired_token_is_absent_and_removed() {
        let store = expired_store();
        let token = store.create(9).await;
        assert_eq!(store.len().await, 1);

        assert_eq!(store.resolve(&token).await, None);
        assert!(store.is_empty().await, "expired entry must be purged on access");

        // Polling again stays absent and does not grow the map.
        assert_eq!(store.resolve(&token).await, None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn revoke_is_idempotent() {
        let store = week_store();
        let token = store.create(3).await;

        assert!(store.revoke(&token).await);
        assert_eq!(store.resolve(&token).await, None);

        assert!(!store.revoke(&token).await);
        assert_eq!(store.resolve(&token).await, None);
    }

    #[tokio::test]
    async fn revoke_leaves_other_sessions_alone() {
        let store = week_store();
        let a = store.create(1).await;
        let b = store.create(1).await;
        store.revoke(&a).await;
        assert_eq!(store.resolve(&b).await, Some(1));
    }

    #[tokio::test]
    async fn oversized_ttl_clamps_expiry_instead_of_panicking() {
        let store = SessionStore::new(chrono::Duration::days(100_000_000));
        let token = store.create(11).await;
        assert_eq!(store.resolve(&token).await, Some(11));
        assert_eq!(store.purge_expired().await, 0);
    }

    #[tokio::test]
    async fn purge_removes_only_expired_entries() {
        let store = expired_store();
        store.create(1).await;
        store.create(2).await;
        assert_eq!(store.purge_expired().await, 2);
        assert!(store.is_empty().await);

        let live = week_store();
        let token = live.create(5).await;
        assert_eq!(live.purge_expired().await, 0);
        assert_eq!(live.resolve(&token).await, Some(5));
    }
}
