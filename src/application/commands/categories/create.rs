// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::application::commands::capability::ensure_capability;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
        forms::FormErrors,
        uploads::UploadedFile,
    },
    domain::category::{CategoryDescription, CategoryName, CategorySlug, NewCategory},
};
use tracing::info;

#[derive(Debug, Default)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    /// Generated from the name when absent or blank.
    pub slug: Option<String>,
    pub image: Option<UploadedFile>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "create")?;

        let CreateCategoryCommand {
            name,
            description,
            is_active,
            slug,
            image,
        } = command;

        let mut errors = FormErrors::new();
        let name = errors.check("name", CategoryName::new(name));
        let explicit_slug = match slug.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => errors.check("slug", CategorySlug::new(raw)),
            _ => None,
        };
        let cover_kind = self.check_cover(&mut errors, image.as_ref());
        errors.into_result()?;
        let Some(name) = name else {
            return Err(ApplicationError::validation("name is required"));
        };

        if self.read_repo.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "category '{name}' already exists"
            )));
        }

        let slug = match explicit_slug {
            Some(slug) => {
                self.slug_service.ensure_available(&slug, None).await?;
                slug
            }
            None => self.slug_service.generate_unique_slug(&name, None).await?,
        };

        let stored_image = match (image, cover_kind) {
            (Some(file), Some(kind)) => Some(self.store_cover(file, kind).await?),
            _ => None,
        };

        let now = self.clock.now();
        let new_category = NewCategory {
            name,
            slug,
            description: CategoryDescription::from_input(description),
            is_active: is_active.unwrap_or(true),
            image: stored_image.clone(),
            created_at: now,
            updated_at: now,
        };

        let created = match self.write_repo.insert(new_category).await {
            Ok(category) => category,
            Err(err) => {
                if let Some(path) = stored_image.as_deref() {
                    self.discard_cover(path).await;
                }
                return Err(err.into());
            }
        };

        info!(
            category_id = i64::from(created.id),
            slug = %created.slug,
            actor = %actor.username,
            "category created"
        );
        Ok(CategoryDto::from_category(created, self.storage.as_ref()))
    }
}
