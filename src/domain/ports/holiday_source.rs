use crate::infrastructure::http::middleware::error::ApiResult;
use async_trait::async_trait;

/// Provider of the raw upstream holiday document.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetch the raw JSON bytes
    async fn fetch(&self) -> ApiResult<Vec<u8>>;

    /// Short label for logs (URL or file path)
    fn describe(&self) -> String;
}
