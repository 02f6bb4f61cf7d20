// src/domain/category/entity.rs
use crate::domain::category::value_objects::{
    CategoryDescription, CategoryId, CategoryName, CategorySlug,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub description: Option<CategoryDescription>,
    pub is_active: bool,
    /// Media path of the cover image, relative to the media root.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn rename(&mut self, name: CategoryName, slug: CategorySlug, now: DateTime<Utc>) {
        self.name = name;
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_active(&mut self, is_active: bool, now: DateTime<Utc>) {
        self.is_active = is_active;
        self.updated_at = now;
    }

    /// Swap the cover image and hand back the one it replaced.
    pub fn replace_image(&mut self, image: Option<String>, now: DateTime<Utc>) -> Option<String> {
        self.updated_at = now;
        std::mem::replace(&mut self.image, image)
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub description: Option<CategoryDescription>,
    pub is_active: bool,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update guarded by the `updated_at` value the caller last saw.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: Option<CategoryName>,
    pub slug: Option<CategorySlug>,
    pub description: Option<Option<CategoryDescription>>,
    pub is_active: Option<bool>,
    pub image: Option<Option<String>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryUpdate {
    pub const fn new(id: CategoryId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            is_active: None,
            image: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_name(mut self, name: CategoryName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: CategorySlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: Option<CategoryDescription>) -> Self {
        self.description = Some(description);
        self
    }

    pub const fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = Some(image);
        self
    }

    pub const fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.is_active.is_none()
            && self.image.is_none()
    }
}
