// src/application/commands/users/register.rs
use super::{
    UserCommandService,
    password::{check_password_pair, validate_password},
};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
        forms::{FormErrors, NON_FIELD_ERRORS},
        uploads::{UploadedFile, inspect_image},
    },
    domain::user::{
        Email, NewUser, NewUserProfile, PasswordHash, PersonName, Role, User, Username,
    },
};
use tracing::info;

#[derive(Debug, Default)]
pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password1: String,
    pub password2: String,
    pub image: Option<UploadedFile>,
}

impl UserCommandService {
    /// Validate the whole form, reporting every field at once, then hash the
    /// password, store the avatar renditions and persist the user.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let RegisterUserCommand {
            username,
            email,
            first_name,
            last_name,
            password1,
            password2,
            image,
        } = command;

        let mut errors = FormErrors::new();
        let username = self.check_username(&mut errors, &username).await?;
        let email = self.check_email(&mut errors, &email).await?;
        let first_name = errors.check("first_name", PersonName::new(first_name));
        let last_name = errors.check("last_name", PersonName::new(last_name));
        let avatar_file = self.check_avatar_upload(&mut errors, image);

        if password1.is_empty() {
            errors.add("password1", "this field is required");
        } else if let Err(msg) = validate_password(&password1) {
            errors.add("password1", msg);
        }
        if password2.is_empty() {
            errors.add("password2", "this field is required");
        }
        if !errors.has("password1") {
            if let Err(msg) =
                check_password_pair(&password1, &password2, username.as_ref(), email.as_ref())
            {
                errors.add(NON_FIELD_ERRORS, msg);
            }
        }
        errors.into_result()?;

        let (Some(username), Some(email), Some(first_name), Some(last_name), Some(file)) =
            (username, email, first_name, last_name, avatar_file)
        else {
            return Err(ApplicationError::validation("registration form is incomplete"));
        };
        let profile = NewUserProfile {
            username,
            email,
            first_name,
            last_name,
        };

        let hashed = self.password_hasher.hash(&password1).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let avatar = self.store_avatar(&file).await.map_err(|err| match err {
            ApplicationError::Validation(msg) => ApplicationError::field("image", msg),
            other => other,
        })?;

        let role = if self.user_repo.count().await? == 0 {
            Role::Admin
        } else {
            Role::Member
        };

        let stored_paths: Vec<String> = avatar.paths().iter().map(|p| (*p).to_owned()).collect();
        let new_user = NewUser::new(profile, password_hash, role, Some(avatar), self.clock.now());
        let user: User = match self.user_repo.insert(new_user).await {
            Ok(user) => user,
            Err(err) => {
                self.discard_files(&stored_paths).await;
                return Err(err.into());
            }
        };

        info!(
            user_id = i64::from(user.id),
            username = %user.username,
            role = %user.role,
            "user registered"
        );
        Ok(UserDto::from_user(user, self.storage.as_ref()))
    }

    /// `Some` only for a valid, unused username; a rejected value takes no
    /// part in the password checks.
    async fn check_username(
        &self,
        errors: &mut FormErrors,
        raw: &str,
    ) -> ApplicationResult<Option<Username>> {
        let raw = raw.trim();
        if raw.is_empty() {
            errors.add("username", "this field is required");
            return Ok(None);
        }
        let Some(username) = errors.check("username", Username::new(raw)) else {
            return Ok(None);
        };
        if self.user_repo.find_by_username(&username).await?.is_some() {
            errors.add("username", "a user with that username already exists");
            return Ok(None);
        }
        Ok(Some(username))
    }

    async fn check_email(
        &self,
        errors: &mut FormErrors,
        raw: &str,
    ) -> ApplicationResult<Option<Email>> {
        if raw.trim().is_empty() {
            errors.add("email", "this field is required");
            return Ok(None);
        }
        let Some(email) = errors.check("email", Email::new(raw)) else {
            return Ok(None);
        };
        if self.user_repo.find_by_email(&email).await?.is_some() {
            errors.add("email", "this email address is already registered");
            return Ok(None);
        }
        Ok(Some(email))
    }

    fn check_avatar_upload(
        &self,
        errors: &mut FormErrors,
        image: Option<UploadedFile>,
    ) -> Option<UploadedFile> {
        let Some(file) = image else {
            errors.add("image", "this field is required");
            return None;
        };
        match inspect_image(self.upload_policy, self.images.as_ref(), &file) {
            Ok(_) => Some(file),
            Err(msg) => {
                errors.add("image", msg);
                None
            }
        }
    }
}
