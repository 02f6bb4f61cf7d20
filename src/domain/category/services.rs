// src/domain/category/services.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::category::repository::CategoryReadRepository;
use crate::domain::category::value_objects::{
    CategoryId, CategoryName, CategorySlug, MAX_SLUG_LENGTH,
};
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service responsible for producing unique slugs for categories.
pub struct CategorySlugService {
    read_repo: Arc<dyn CategoryReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl CategorySlugService {
    pub fn new(
        read_repo: Arc<dyn CategoryReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            clock,
        }
    }

    /// Slugify `name` and append `-1`, `-2`, ... until no other category owns it.
    /// A slug already held by `ignore_id` counts as free.
    pub async fn generate_unique_slug(
        &self,
        name: &CategoryName,
        ignore_id: Option<CategoryId>,
    ) -> DomainResult<CategorySlug> {
        let base = fit_within(&self.generator.slugify(name.as_str()), MAX_SLUG_LENGTH);
        let base = if base.is_empty() {
            format!("category-{}", self.clock.now().timestamp())
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            let slug = CategorySlug::new(candidate)?;
            if self.is_free(&slug, ignore_id).await? {
                return Ok(slug);
            }
            let suffix = format!("-{counter}");
            let stem = fit_within(&base, MAX_SLUG_LENGTH - suffix.len());
            candidate = format!("{stem}{suffix}");
            counter += 1;
        }
    }

    /// Reject a caller-chosen slug that belongs to another category.
    pub async fn ensure_available(
        &self,
        slug: &CategorySlug,
        ignore_id: Option<CategoryId>,
    ) -> DomainResult<()> {
        if self.is_free(slug, ignore_id).await? {
            Ok(())
        } else {
            Err(DomainError::Conflict(format!(
                "slug '{slug}' is already in use"
            )))
        }
    }

    async fn is_free(
        &self,
        slug: &CategorySlug,
        ignore_id: Option<CategoryId>,
    ) -> DomainResult<bool> {
        Ok(match self.read_repo.find_by_slug(slug).await? {
            Some(existing) => ignore_id == Some(existing.id),
            None => true,
        })
    }
}

/// Truncate an ascii slug to `max` bytes without leaving a dangling hyphen.
fn fit_within(slug: &str, max: usize) -> String {
    let truncated: String = slug.chars().take(max).collect();
    truncated.trim_end_matches('-').to_owned()
}
