// src/domain/user/entity.rs
use crate::domain::user::value_objects::{
    AvatarSet, Email, PasswordHash, PersonName, Role, UserId, Username,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub avatar: Option<AvatarSet>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub avatar: Option<AvatarSet>,
    pub created_at: DateTime<Utc>,
}

/// Validated registration data, before the password is hashed.
#[derive(Debug, Clone)]
pub struct NewUserProfile {
    pub username: Username,
    pub email: Email,
    pub first_name: PersonName,
    pub last_name: PersonName,
}

impl NewUser {
    pub fn new(
        profile: NewUserProfile,
        password_hash: PasswordHash,
        role: Role,
        avatar: Option<AvatarSet>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let NewUserProfile {
            username,
            email,
            first_name,
            last_name,
        } = profile;
        Self {
            username,
            email,
            first_name,
            last_name,
            password_hash,
            role,
            is_active: true,
            avatar,
            created_at,
        }
    }
}
