use crate::domain::ports::file_storage::FileStorage;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Key/value byte store rooted at a directory on the local filesystem.
#[derive(Clone, Debug)]
pub struct LocalFileStorage {
    base_path: PathBuf,
}

impl LocalFileStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a key under the base path. Keys must be relative and may not climb out.
    fn resolve_path(&self, path: &str) -> ApiResult<PathBuf> {
        let relative = Path::new(path);

        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if path.is_empty() || escapes {
            return Err(ApiError::BadRequest(format!(
                "Storage key {:?} must be a relative path inside the storage root",
                path
            )));
        }

        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn save(&self, path: &str, content: &[u8]) -> ApiResult<()> {
        let file_path = self.resolve_path(path)?;

        // Ensure directory exists
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ApiError::Internal(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(&file_path, content)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to write file: {}", e)))
    }

    async fn read(&self, path: &str) -> ApiResult<Vec<u8>> {
        let file_path = self.resolve_path(path)?;
        fs::read(&file_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ApiError::NotFound(format!("{} not found in storage", path))
            } else {
                ApiError::Internal(format!("Failed to read file: {}", e))
            }
        })
    }

    async fn exists(&self, path: &str) -> ApiResult<bool> {
        let file_path = self.resolve_path(path)?;
        fs::try_exists(&file_path)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to stat file: {}", e)))
    }

    async fn clear(&self) -> ApiResult<()> {
        match fs::remove_dir_all(&self.base_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ApiError::Internal(format!(
                    "Failed to clear {}: {}",
                    self.base_path.display(),
                    e
                )))
            }
        }

        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to create directory: {}", e)))
    }
}
