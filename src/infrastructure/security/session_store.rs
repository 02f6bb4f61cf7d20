// src/infrastructure/security/session_store.rs
use crate::application::ApplicationResult;
use crate::application::ports::session_revocation::SessionRevocationStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local revocation list keyed by session id. Revocations are lost on
/// restart, which only matters until the revoked tokens expire.
#[derive(Default)]
pub struct InMemorySessionRevocationStore {
    revoked: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl InMemorySessionRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn tracked_sessions(&self) -> usize {
        self.revoked.read().await.len()
    }
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        Ok(self.revoked.read().await.contains_key(session_id))
    }

    async fn revoke(
        &self,
        session_id: &str,
        until: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> ApplicationResult<()> {
        let mut revoked = self.revoked.write().await;
        revoked.retain(|_, expires| *expires > now);
        revoked.insert(session_id.to_owned(), until);
        Ok(())
    }
}
