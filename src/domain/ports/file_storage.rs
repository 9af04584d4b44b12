use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Save a file to the storage
    async fn save(&self, path: &str, content: &[u8]) -> ApiResult<()>;

    /// Read a file from the storage
    async fn read(&self, path: &str) -> ApiResult<Vec<u8>>;

    /// Check if a file exists
    async fn exists(&self, path: &str) -> ApiResult<bool>;

    /// Remove everything stored under the storage root
    async fn clear(&self) -> ApiResult<()>;
}
