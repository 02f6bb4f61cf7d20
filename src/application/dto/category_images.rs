use crate::application::ports::storage::MediaStorage;
use crate::domain::category_image::CategoryImage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryImageDto {
    pub id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub image: String,
    pub url: String,
    pub original_filename: String,
    #[serde(with = "serde_time")]
    pub uploaded_at: DateTime<Utc>,
}

impl CategoryImageDto {
    pub fn from_image(image: CategoryImage, storage: &dyn MediaStorage) -> Self {
        Self {
            id: image.id.into(),
            category_id: image.category_id.map(Into::into),
            url: storage.url(&image.image),
            image: image.image,
            original_filename: image.original_filename.into_inner(),
            uploaded_at: image.uploaded_at,
        }
    }
}
