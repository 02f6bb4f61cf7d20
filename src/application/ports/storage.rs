// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// File storage for user uploads. Paths are relative to the media root and
/// use `/` separators, e.g. `avatars/3f2a_small.jpg`.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Persist `data` as `directory/file_name` and return the stored path.
    async fn save(&self, directory: &str, file_name: &str, data: Bytes)
    -> ApplicationResult<String>;

    /// Remove a stored file. Missing files are not an error.
    async fn delete(&self, path: &str) -> ApplicationResult<()>;

    /// Public URL under which `path` is served.
    fn url(&self, path: &str) -> String;
}
