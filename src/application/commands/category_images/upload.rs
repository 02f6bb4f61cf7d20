// src/application/commands/category_images/upload.rs
use super::CategoryImageCommandService;
use crate::application::commands::capability::ensure_capability;
use crate::{
    application::{
        dto::{AuthenticatedUser, CategoryImageDto},
        error::{ApplicationError, ApplicationResult},
        forms::FormErrors,
        uploads::{UploadedFile, inspect_image},
    },
    domain::{
        category::CategoryId,
        category_image::{NewCategoryImage, OriginalFilename},
    },
};
use tracing::{info, warn};
use uuid::Uuid;

const DESCRIPTION_DIRECTORY: &str = "category_descriptions";

pub struct UploadCategoryImageCommand {
    pub category_id: Option<i64>,
    pub image: Option<UploadedFile>,
}

impl CategoryImageCommandService {
    pub async fn upload_image(
        &self,
        actor: &AuthenticatedUser,
        command: UploadCategoryImageCommand,
    ) -> ApplicationResult<CategoryImageDto> {
        ensure_capability(actor, "categories", "update")?;

        let mut errors = FormErrors::new();
        let category_id = match command.category_id {
            Some(raw) => match errors.check("category_id", CategoryId::new(raw)) {
                Some(id) if self.category_repo.find_by_id(id).await?.is_some() => Some(id),
                Some(_) => {
                    errors.add("category_id", "select an existing category");
                    None
                }
                None => None,
            },
            None => None,
        };

        let kind = match command.image.as_ref() {
            None => {
                errors.add("image", "this field is required");
                None
            }
            Some(file) => match inspect_image(self.upload_policy, self.images.as_ref(), file) {
                Ok(kind) => Some(kind),
                Err(msg) => {
                    errors.add("image", msg);
                    None
                }
            },
        };
        errors.into_result()?;

        let (Some(file), Some(kind)) = (command.image, kind) else {
            return Err(ApplicationError::validation("image is required"));
        };

        let original_filename = OriginalFilename::new(file.file_name.as_str());
        let file_name = format!("{}.{}", Uuid::new_v4(), kind.extension());
        let path = self
            .storage
            .save(DESCRIPTION_DIRECTORY, &file_name, file.data)
            .await?;

        let new_image = NewCategoryImage {
            category_id,
            image: path.clone(),
            original_filename,
            uploaded_at: self.clock.now(),
        };

        let saved = match self.image_repo.insert(new_image).await {
            Ok(saved) => saved,
            Err(err) => {
                if let Err(cleanup) = self.storage.delete(&path).await {
                    warn!(path, error = %cleanup, "failed to remove orphaned upload");
                }
                return Err(err.into());
            }
        };

        info!(
            image_id = i64::from(saved.id),
            category_id = saved.category_id.map(i64::from),
            "category description image uploaded"
        );
        Ok(CategoryImageDto::from_image(saved, self.storage.as_ref()))
    }
}
