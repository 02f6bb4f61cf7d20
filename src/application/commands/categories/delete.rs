// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::application::commands::capability::ensure_capability;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};
use tracing::info;

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "categories", "delete")?;

        let id = CategoryId::new(command.id)?;
        let category = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        // Description images keep their files; the foreign key clears their link.
        self.write_repo.delete(id).await?;

        if let Some(path) = category.image.as_deref() {
            self.discard_cover(path).await;
        }

        info!(
            category_id = i64::from(id),
            actor = %actor.username,
            "category deleted"
        );
        Ok(())
    }
}
