// src/application/ports/session_revocation.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Sessions ended by logout. An entry only has to outlive the token it
/// belongs to; after `until` the token fails verification on its own.
#[async_trait]
pub trait SessionRevocationStore: Send + Sync {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool>;

    /// Revoke `session_id` until `until`. Entries that expired before `now`
    /// may be dropped.
    async fn revoke(
        &self,
        session_id: &str,
        until: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> ApplicationResult<()>;
}
