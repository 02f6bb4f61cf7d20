// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::application::commands::capability::ensure_capability;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
        forms::FormErrors,
        uploads::UploadedFile,
    },
    domain::category::{
        Category, CategoryDescription, CategoryId, CategoryName, CategorySlug, CategoryUpdate,
    },
};
use tracing::info;

#[derive(Debug, Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    /// `Some("")` clears the description.
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub slug: Option<String>,
    pub image: Option<UploadedFile>,
    pub clear_image: bool,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "update")?;

        let id = CategoryId::new(command.id)?;
        let mut category = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let UpdateCategoryCommand {
            id: _,
            name,
            description,
            is_active,
            slug,
            image,
            clear_image,
        } = command;

        let mut errors = FormErrors::new();
        let name = name.and_then(|raw| errors.check("name", CategoryName::new(raw)));
        let explicit_slug = match slug.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => errors.check("slug", CategorySlug::new(raw)),
            _ => None,
        };
        if image.is_some() && clear_image {
            errors.add(
                "image",
                "either submit a new file or clear the current one, not both",
            );
        }
        let cover_kind = self.check_cover(&mut errors, image.as_ref());
        errors.into_result()?;

        let mut update = CategoryUpdate::new(id, category.updated_at);
        let now = self.clock.now();

        update = self
            .apply_naming(&mut category, name, explicit_slug, update)
            .await?;

        if let Some(raw) = description {
            let description = CategoryDescription::from_input(Some(raw));
            if description != category.description {
                category.description.clone_from(&description);
                update = update.with_description(description);
            }
        }

        if let Some(flag) = is_active.filter(|flag| *flag != category.is_active) {
            category.set_active(flag, now);
            update = update.with_is_active(flag);
        }

        let mut stored_image = None;
        let mut replaced_image = None;
        if let (Some(file), Some(kind)) = (image, cover_kind) {
            let path = self.store_cover(file, kind).await?;
            replaced_image = category.replace_image(Some(path.clone()), now);
            update = update.with_image(Some(path.clone()));
            stored_image = Some(path);
        } else if clear_image && category.image.is_some() {
            replaced_image = category.replace_image(None, now);
            update = update.with_image(None);
        }

        if update.is_empty() {
            return Ok(CategoryDto::from_category(category, self.storage.as_ref()));
        }
        update.set_updated_at(now);

        let updated = match self.write_repo.update(update).await {
            Ok(category) => category,
            Err(err) => {
                if let Some(path) = stored_image.as_deref() {
                    self.discard_cover(path).await;
                }
                return Err(err.into());
            }
        };

        if let Some(previous) = replaced_image.as_deref() {
            self.discard_cover(previous).await;
        }

        info!(category_id = i64::from(updated.id), actor = %actor.username, "category updated");
        Ok(CategoryDto::from_category(updated, self.storage.as_ref()))
    }

    /// A new name brings a regenerated slug unless the caller chose one.
    async fn apply_naming(
        &self,
        category: &mut Category,
        name: Option<CategoryName>,
        explicit_slug: Option<CategorySlug>,
        mut update: CategoryUpdate,
    ) -> ApplicationResult<CategoryUpdate> {
        let renamed = name.filter(|name| *name != category.name);

        if let Some(name) = &renamed {
            if let Some(other) = self.read_repo.find_by_name(name).await? {
                if other.id != category.id {
                    return Err(ApplicationError::conflict(format!(
                        "category '{name}' already exists"
                    )));
                }
            }
        }

        let slug = match (&explicit_slug, &renamed) {
            (Some(slug), _) if *slug != category.slug => {
                self.slug_service
                    .ensure_available(slug, Some(category.id))
                    .await?;
                Some(slug.clone())
            }
            (Some(_), _) => None,
            (None, Some(name)) => {
                let generated = self
                    .slug_service
                    .generate_unique_slug(name, Some(category.id))
                    .await?;
                (generated != category.slug).then_some(generated)
            }
            (None, None) => None,
        };

        if renamed.is_none() && slug.is_none() {
            return Ok(update);
        }

        let now = self.clock.now();
        let next_name = renamed.clone().unwrap_or_else(|| category.name.clone());
        let next_slug = slug.clone().unwrap_or_else(|| category.slug.clone());
        category.rename(next_name, next_slug, now);

        if let Some(name) = renamed {
            update = update.with_name(name);
        }
        if let Some(slug) = slug {
            update = update.with_slug(slug);
        }
        Ok(update)
    }
}
