use crate::application::ports::storage::MediaStorage;
use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    /// Stored media path, relative to the media root.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl CategoryDto {
    pub fn from_category(category: Category, storage: &dyn MediaStorage) -> Self {
        let image_url = category.image.as_deref().map(|path| storage.url(path));
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            description: category.description.map(|d| d.into_inner()),
            is_active: category.is_active,
            image: category.image,
            image_url,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
