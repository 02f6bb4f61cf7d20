// src/application/commands/categories/media.rs
use super::CategoryCommandService;
use crate::application::{
    error::ApplicationResult,
    forms::FormErrors,
    uploads::{ImageKind, UploadedFile, inspect_image},
};
use tracing::warn;
use uuid::Uuid;

pub(super) const COVER_DIRECTORY: &str = "images";

impl CategoryCommandService {
    /// Validate an optional cover upload, recording problems under `image`.
    pub(super) fn check_cover(
        &self,
        errors: &mut FormErrors,
        file: Option<&UploadedFile>,
    ) -> Option<ImageKind> {
        let file = file?;
        match inspect_image(self.upload_policy, self.images.as_ref(), file) {
            Ok(kind) => Some(kind),
            Err(msg) => {
                errors.add("image", msg);
                None
            }
        }
    }

    pub(super) async fn store_cover(
        &self,
        file: UploadedFile,
        kind: ImageKind,
    ) -> ApplicationResult<String> {
        let file_name = format!("{}.{}", Uuid::new_v4(), kind.extension());
        self.storage
            .save(COVER_DIRECTORY, &file_name, file.data)
            .await
    }

    /// Best-effort removal; the database row is already consistent at this point.
    pub(super) async fn discard_cover(&self, path: &str) {
        if let Err(err) = self.storage.delete(path).await {
            warn!(path, error = %err, "failed to delete category image");
        }
    }
}
