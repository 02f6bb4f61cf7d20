// src/application/commands/category_images/delete.rs
use super::CategoryImageCommandService;
use crate::application::commands::capability::ensure_capability;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category_image::CategoryImageId,
};
use tracing::{info, warn};

pub struct DeleteCategoryImageCommand {
    pub id: i64,
}

impl CategoryImageCommandService {
    pub async fn delete_image(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryImageCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "categories", "delete")?;

        let id = CategoryImageId::new(command.id)?;
        let image = self
            .image_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("image not found"))?;

        self.image_repo.delete(id).await?;
        if let Err(err) = self.storage.delete(&image.image).await {
            warn!(path = %image.image, error = %err, "failed to delete description image");
        }

        info!(image_id = i64::from(id), "category description image deleted");
        Ok(())
    }
}
