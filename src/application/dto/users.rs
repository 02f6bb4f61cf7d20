use crate::application::ports::storage::MediaStorage;
use crate::domain::user::{AvatarSet, Capability, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{auth::AuthenticatedUser, serde_time};

/// Public URLs of the three avatar renditions.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvatarDto {
    pub small: String,
    pub medium: String,
    pub large: String,
}

impl AvatarDto {
    pub fn from_set(set: &AvatarSet, storage: &dyn MediaStorage) -> Self {
        Self {
            small: storage.url(&set.small),
            medium: storage.url(&set.medium),
            large: storage.url(&set.large),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// `admin` or `member`.
    pub role: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<AvatarDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    pub fn from_user(user: User, storage: &dyn MediaStorage) -> Self {
        let avatar = user
            .avatar
            .as_ref()
            .map(|set| AvatarDto::from_set(set, storage));
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            email: user.email.to_string(),
            first_name: user.first_name.to_string(),
            last_name: user.last_name.to_string(),
            role: user.role.as_str().to_owned(),
            is_active: user.is_active,
            avatar,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CapabilityView {
    pub resource: String,
    pub action: String,
}

impl From<Capability> for CapabilityView {
    fn from(value: Capability) -> Self {
        Self {
            resource: value.resource,
            action: value.action,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub user: UserDto,
    pub capabilities: Vec<CapabilityView>,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

impl UserProfileDto {
    pub fn from_parts(
        user: User,
        auth: &AuthenticatedUser,
        storage: &dyn MediaStorage,
        now: DateTime<Utc>,
    ) -> Self {
        let mut capabilities: Vec<_> = auth
            .capabilities
            .iter()
            .cloned()
            .map(CapabilityView::from)
            .collect();
        capabilities.sort_by(|a, b| {
            a.resource
                .cmp(&b.resource)
                .then_with(|| a.action.cmp(&b.action))
        });
        let expires_in = auth
            .expires_at
            .signed_duration_since(now)
            .num_seconds()
            .max(0);

        Self {
            user: UserDto::from_user(user, storage),
            capabilities,
            expires_at: auth.expires_at,
            expires_in,
        }
    }
}
