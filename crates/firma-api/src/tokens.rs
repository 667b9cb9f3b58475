//! In-memory access-token store.
//!
//! A token authorizes exactly one filename for a fixed validity window.
//! Records live only in this process; a restart clears all outstanding tokens.
//! Expired records are evicted lazily on lookup, and a periodic sweep (see
//! `setup::spawn_token_sweeper`) keeps the map from accumulating tokens that
//! are never looked up again.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TokenRecord {
    pub request_id: String,
    pub filename: String,
    pub expires_at: DateTime<Utc>,
}

/// Store of outstanding access tokens, owned by the service instance.
///
/// Handlers run concurrently, so the map sits behind an async `RwLock`; every
/// operation here takes the write lock since even lookups may evict.
#[derive(Debug)]
pub struct TokenStore {
    ttl: Duration,
    tokens: RwLock<HashMap<String, TokenRecord>>,
}

impl TokenStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Issue a fresh token scoped to `filename` on ticket `request_id`.
    pub async fn issue(&self, request_id: &str, filename: &str) -> String {
        let token = Uuid::new_v4().to_string();
        let record = TokenRecord {
            request_id: request_id.to_string(),
            filename: filename.to_string(),
            expires_at: Utc::now() + self.ttl,
        };

        self.tokens.write().await.insert(token.clone(), record);
        token
    }

    /// Shared predicate gating download and delete.
    ///
    /// Fails if the token is unknown, scoped to a different filename, or at or
    /// past its expiry; the expiry case also evicts the record.
    pub async fn authorize(&self, token: &str, filename: &str) -> bool {
        let mut tokens = self.tokens.write().await;

        let Some(record) = tokens.get(token) else {
            return false;
        };
        if record.filename != filename {
            return false;
        }
        if Utc::now() >= record.expires_at {
            tokens.remove(token);
            return false;
        }
        true
    }

    /// Remove all expired records. Returns how many were removed.
    pub async fn sweep(&self) -> usize {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        let now = Utc::now();
        tokens.retain(|_, record| now < record.expires_at);
        before - tokens.len()
    }

    /// Number of outstanding (not yet evicted) tokens.
    pub async fn outstanding(&self) -> usize {
        self.tokens.read().await.len()
    }
}
