// src/application/commands/users/logout.rs
use super::UserCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use tracing::info;

impl UserCommandService {
    /// Revoke the session the token was issued for, until the token expires.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        let session_id = actor
            .session_id
            .as_deref()
            .ok_or_else(|| ApplicationError::validation("token is not bound to a session"))?;
        self.session_revocation_store
            .revoke(session_id, actor.expires_at, self.clock.now())
            .await?;
        info!(user_id = i64::from(actor.id), session_id, "session revoked");
        Ok(())
    }
}
