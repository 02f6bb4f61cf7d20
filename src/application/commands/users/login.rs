// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User, Username},
};
use tracing::info;
use uuid::Uuid;

pub struct LoginUserCommand {
    /// Username or email address.
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(command.username.trim(), &command.password)
            .await?;

        let session_id = Uuid::new_v4().to_string();
        let token = self.issue_session_token(&user, &session_id).await?;

        info!(user_id = i64::from(user.id), session_id = %session_id, "user logged in");
        Ok(LoginResult {
            token,
            user: UserDto::from_user(user, self.storage.as_ref()),
        })
    }

    async fn issue_session_token(
        &self,
        user: &User,
        session_id: &str,
    ) -> ApplicationResult<AuthTokenDto> {
        self.token_manager
            .issue(TokenSubject::for_session(user, session_id))
            .await
    }

    /// The identifier is tried as a username first, then as an email address.
    async fn find_and_authenticate_user(
        &self,
        identifier: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        let invalid = || ApplicationError::unauthorized("invalid credentials");

        let mut user = match Username::new(identifier) {
            Ok(username) => self.user_repo.find_by_username(&username).await?,
            Err(_) => None,
        };
        if user.is_none() {
            if let Ok(email) = Email::new(identifier) {
                user = self.user_repo.find_by_email(&email).await?;
            }
        }
        let user = user.ok_or_else(invalid)?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        Ok(user)
    }
}
