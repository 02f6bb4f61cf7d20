// tests/support/mocks/security.rs
use async_trait::async_trait;
use catalog_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use catalog_core::domain::user::{Role, UserId};
use chrono::Duration;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const MEMBER_TOKEN: &str = "member-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

const ISSUED_PREFIX: &str = "issued";

/// Static tokens for an admin (id 1) and a member (id 2), plus tokens minted
/// by `issue` of the form `issued:<user id>:<role>:<session id>`.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

fn user(id: i64, username: &str, role: Role, session_id: Option<String>) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("positive id"),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
        session_id,
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        let session_id = subject.session_id.unwrap_or_default();
        Ok(AuthTokenDto {
            token: format!(
                "{ISSUED_PREFIX}:{}:{}:{session_id}",
                i64::from(subject.user_id),
                subject.role
            ),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
            session_id: Some(session_id),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(user(1, "admin", Role::Admin, None)),
            MEMBER_TOKEN => Ok(user(2, "member", Role::Member, None)),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("token expired")),
            other => {
                let parts: Vec<&str> = other.split(':').collect();
                match parts.as_slice() {
                    [ISSUED_PREFIX, id, role, session] => {
                        let id = id
                            .parse::<i64>()
                            .map_err(|_| ApplicationError::unauthorized("invalid token"))?;
                        let role = role
                            .parse::<Role>()
                            .map_err(|_| ApplicationError::unauthorized("invalid token"))?;
                        Ok(user(id, "issued", role, Some((*session).to_string())))
                    }
                    _ => Err(ApplicationError::unauthorized("invalid token")),
                }
            }
        }
    }
}

/// Stores passwords as `plain$<password>`; fast and good enough for flows
/// that only need hash/verify to agree.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash.strip_prefix("plain$") == Some(password) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
