// src/domain/category_image/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;

pub const MAX_ORIGINAL_FILENAME_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryImageId(i64);

impl CategoryImageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("image id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryImageId> for i64 {
    fn from(value: CategoryImageId) -> Self {
        value.0
    }
}

/// Client-side file name, kept for search. Truncated rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OriginalFilename(String);

impl OriginalFilename {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        Self(trimmed.chars().take(MAX_ORIGINAL_FILENAME_LENGTH).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OriginalFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Image embedded in a category description. Survives its category: the
/// link is cleared when the category is deleted.
#[derive(Debug, Clone)]
pub struct CategoryImage {
    pub id: CategoryImageId,
    pub category_id: Option<CategoryId>,
    pub image: String,
    pub original_filename: OriginalFilename,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategoryImage {
    pub category_id: Option<CategoryId>,
    pub image: String,
    pub original_filename: OriginalFilename,
    pub uploaded_at: DateTime<Utc>,
}
