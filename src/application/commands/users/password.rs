// src/application/commands/users/password.rs
use crate::domain::user::{Email, Username};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

const COMMON_PASSWORDS: [&str; 4] = ["12345678", "password", "qwerty123", "11111111"];

/// Rules applied to the password on its own. Stops at the first failure.
pub(super) fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }
    if password.chars().all(|c| c.is_numeric()) {
        return Err("password cannot consist of digits only".into());
    }
    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        return Err("this password is too common".into());
    }
    Ok(())
}

/// Cross-field rules. Only the first violated rule is reported.
pub(super) fn check_password_pair(
    password1: &str,
    password2: &str,
    username: Option<&Username>,
    email: Option<&Email>,
) -> Result<(), String> {
    if password1.is_empty() || password2.is_empty() {
        return Ok(());
    }
    if password1 != password2 {
        return Err("the two password fields do not match".into());
    }
    let lowered = password1.to_lowercase();
    if let Some(username) = username {
        if lowered.contains(&username.as_str().to_lowercase()) {
            return Err("password must not contain the username".into());
        }
    }
    if let Some(email) = email {
        let local = email.local_part();
        if !local.is_empty() && lowered.contains(local) {
            return Err("password must not contain part of the email address".into());
        }
    }
    Ok(())
}
