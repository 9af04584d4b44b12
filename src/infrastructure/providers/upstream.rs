use crate::domain::ports::holiday_source::HolidaySource;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Fetches the holiday dataset from the data.taipei open data API.
#[derive(Clone)]
pub struct HttpHolidaySource {
    url: String,
    http_client: Client,
}

impl HttpHolidaySource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(url, http_client))
    }

    /// Use an existing client; one client is meant to be shared per process.
    pub fn with_client(url: impl Into<String>, http_client: Client) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl HolidaySource for HttpHolidaySource {
    async fn fetch(&self) -> ApiResult<Vec<u8>> {
        info!("Fetching holiday dataset from {}", self.url);

        let response = self.http_client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(500).collect();
            warn!("Holiday dataset fetch returned HTTP {}", status.as_u16());
            return Err(ApiError::Upstream(format!(
                "HTTP {}: {}",
                status.as_u16(),
                snippet
            )));
        }

        let bytes = response.bytes().await?;
        info!("Fetched {} bytes of holiday data", bytes.len());
        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the dataset from a local JSON file (development fallback).
#[derive(Clone, Debug)]
pub struct FileHolidaySource {
    path: PathBuf,
}

impl FileHolidaySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl HolidaySource for FileHolidaySource {
    async fn fetch(&self) -> ApiResult<Vec<u8>> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ApiError::NotFound(format!("{} does not exist", self.path.display()))
            } else {
                ApiError::Internal(format!("Failed to read {}: {}", self.path.display(), e))
            }
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
