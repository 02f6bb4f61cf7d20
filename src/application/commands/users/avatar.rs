// src/application/commands/users/avatar.rs
use super::UserCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        uploads::UploadedFile,
    },
    domain::user::{AvatarSet, AvatarSize},
};
use tracing::warn;
use uuid::Uuid;

const AVATAR_DIRECTORY: &str = "avatars";

impl UserCommandService {
    /// Produce and store the small, medium and large renditions. On failure
    /// the renditions stored so far are removed again.
    pub(super) async fn store_avatar(&self, file: &UploadedFile) -> ApplicationResult<AvatarSet> {
        let stem = Uuid::new_v4();
        let mut stored: Vec<String> = Vec::with_capacity(AvatarSize::ALL.len());

        for size in AvatarSize::ALL {
            match self.store_rendition(file, stem, size).await {
                Ok(path) => stored.push(path),
                Err(err) => {
                    self.discard_files(&stored).await;
                    return Err(err);
                }
            }
        }

        let [small, medium, large]: [String; 3] = stored
            .try_into()
            .map_err(|_| ApplicationError::infrastructure("incomplete avatar renditions"))?;
        Ok(AvatarSet {
            small,
            medium,
            large,
        })
    }

    async fn store_rendition(
        &self,
        file: &UploadedFile,
        stem: Uuid,
        size: AvatarSize,
    ) -> ApplicationResult<String> {
        let (max_width, max_height) = size.bounds();
        let resized = self
            .images
            .resize_to_fit(file.data.clone(), max_width, max_height)
            .await?;
        let file_name = format!("{stem}_{}.{}", size.label(), resized.kind.extension());
        self.storage
            .save(AVATAR_DIRECTORY, &file_name, resized.data)
            .await
    }

    pub(super) async fn discard_files(&self, paths: &[String]) {
        for path in paths {
            if let Err(err) = self.storage.delete(path).await {
                warn!(path = %path, error = %err, "failed to delete avatar file");
            }
        }
    }
}
