// src/application/queries/categories/get.rs
use super::CategoryQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{Category, CategoryId, CategorySlug},
};

pub struct GetCategoryByIdQuery {
    pub id: i64,
}

pub struct GetCategoryBySlugQuery {
    pub slug: String,
}

impl CategoryQueryService {
    pub async fn get_category_by_id(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetCategoryByIdQuery,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(query.id)?;
        let category = self.read_repo.find_by_id(id).await?;
        self.visible(actor, category)
    }

    pub async fn get_category_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetCategoryBySlugQuery,
    ) -> ApplicationResult<CategoryDto> {
        // A malformed slug cannot match anything.
        let Ok(slug) = CategorySlug::new(query.slug) else {
            return Err(ApplicationError::not_found("category not found"));
        };
        let category = self.read_repo.find_by_slug(&slug).await?;
        self.visible(actor, category)
    }

    /// Inactive categories look missing to anyone who cannot list them.
    fn visible(
        &self,
        actor: Option<&AuthenticatedUser>,
        category: Option<Category>,
    ) -> ApplicationResult<CategoryDto> {
        let category = category
            .filter(|category| {
                category.is_active
                    || actor.is_some_and(|a| a.has_capability("categories", "view:inactive"))
            })
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;
        Ok(CategoryDto::from_category(category, self.storage.as_ref()))
    }
}
