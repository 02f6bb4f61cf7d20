// src/infrastructure/media/local_storage.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::MediaStorage,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Stores uploads below a root directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: &str) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Map a stored relative path to a location under the root, refusing
    /// anything that could escape it.
    fn resolve(&self, relative: &str) -> ApplicationResult<PathBuf> {
        let candidate = Path::new(relative);
        let mut resolved = self.root.clone();
        let mut depth = 0usize;
        for component in candidate.components() {
            match component {
                Component::Normal(part) => {
                    resolved.push(part);
                    depth += 1;
                }
                Component::CurDir => {}
                _ => {
                    return Err(ApplicationError::validation(format!(
                        "invalid media path '{relative}'"
                    )));
                }
            }
        }
        if depth == 0 {
            return Err(ApplicationError::validation("empty media path"));
        }
        Ok(resolved)
    }
}

/// Keep only characters that are safe in a single path component.
fn sanitize_path_component(s: &str) -> String {
    let mut output = String::with_capacity(s.len().min(255));
    let mut previous_dot = false;

    for c in s.chars() {
        if !(c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.') {
            continue;
        }
        if c == '.' && (previous_dot || output.is_empty()) {
            continue;
        }
        previous_dot = c == '.';
        output.push(c);
        if output.len() >= 255 {
            break;
        }
    }

    output
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn save(&self, directory: &str, file_name: &str, data: Bytes) -> ApplicationResult<String> {
        let directory = sanitize_path_component(directory);
        let file_name = sanitize_path_component(file_name);
        if directory.is_empty() || file_name.is_empty() {
            return Err(ApplicationError::validation("invalid media file name"));
        }

        let relative = format!("{directory}/{file_name}");
        let target_dir = self.root.join(&directory);
        tokio::fs::create_dir_all(&target_dir)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("create {directory}: {err}")))?;
        tokio::fs::write(target_dir.join(&file_name), &data)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("write {relative}: {err}")))?;

        debug!(path = %relative, bytes = data.len(), "media file stored");
        Ok(relative)
    }

    async fn delete(&self, path: &str) -> ApplicationResult<()> {
        let target = self.resolve(path)?;
        match tokio::fs::remove_file(&target).await {
            Ok(()) => {
                debug!(path, "media file deleted");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(format!(
                "delete {path}: {err}"
            ))),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_components() {
        assert_eq!(sanitize_path_component("avatars"), "avatars");
        assert_eq!(sanitize_path_component("../../etc/passwd"), "etcpasswd");
        assert_eq!(sanitize_path_component("a b..c.jpg"), "ab.c.jpg");
    }

    #[test]
    fn urls_join_base_and_path() {
        let storage = LocalMediaStorage::new("media", "/media/");
        assert_eq!(storage.url("images/x.png"), "/media/images/x.png");
    }

    #[tokio::test]
    async fn save_and_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalMediaStorage::new(dir.path(), "/media");

        let path = storage
            .save("images", "cover.png", Bytes::from_static(b"png"))
            .await
            .unwrap();
        assert_eq!(path, "images/cover.png");
        assert!(dir.path().join("images/cover.png").exists());

        storage.delete(&path).await.unwrap();
        assert!(!dir.path().join("images/cover.png").exists());
        storage.delete(&path).await.unwrap();
    }

    #[tokio::test]
    async fn delete_refuses_to_leave_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalMediaStorage::new(dir.path(), "/media");
        assert!(storage.delete("../outside.txt").await.is_err());
        assert!(storage.delete("/etc/passwd").await.is_err());
    }
}
