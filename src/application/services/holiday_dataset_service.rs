use crate::domain::entities::holiday::Dataset;
use crate::domain::ports::file_storage::FileStorage;
use crate::domain::ports::holiday_source::HolidaySource;
use crate::domain::services::dataset_parser::parse_dataset;
use crate::infrastructure::http::middleware::error::ApiResult;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Fetch-or-cache-read of the raw upstream dataset, followed by parsing.
///
/// Order of preference:
/// 1. the cache store, when configured and holding `cache_key`;
/// 2. the primary source;
/// 3. the fallback source, when configured and the primary failed.
///
/// Freshly fetched bytes are written back to the cache store once they parse.
#[derive(Clone)]
pub struct HolidayDatasetService {
    source: Arc<dyn HolidaySource>,
    fallback: Option<Arc<dyn HolidaySource>>,
    cache: Option<Arc<dyn FileStorage>>,
    cache_key: String,
    loaded: Arc<OnceCell<Arc<Dataset>>>,
}

impl HolidayDatasetService {
    pub fn new(source: Arc<dyn HolidaySource>) -> Self {
        Self {
            source,
            fallback: None,
            cache: None,
            cache_key: String::new(),
            loaded: Arc::new(OnceCell::new()),
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn HolidaySource>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn FileStorage>, cache_key: impl Into<String>) -> Self {
        self.cache = Some(cache);
        self.cache_key = cache_key.into();
        self
    }

    /// Parsed dataset, loaded on first use and shared read-only afterwards.
    pub async fn dataset(&self) -> ApiResult<Arc<Dataset>> {
        self.loaded
            .get_or_try_init(|| async { self.load().await.map(Arc::new) })
            .await
            .cloned()
    }

    /// Load and parse without memoizing.
    pub async fn load(&self) -> ApiResult<Dataset> {
        let (raw, fetched) = self.load_raw().await?;
        let dataset = parse_dataset(&raw)?;
        info!("Parsed {} holiday records", dataset.len());

        if fetched {
            if let Some(cache) = &self.cache {
                info!("Writing holiday dataset cache: {}", self.cache_key);
                cache.save(&self.cache_key, &raw).await?;
            }
        }

        Ok(dataset)
    }

    /// Raw bytes plus whether they came from a source rather than the cache.
    async fn load_raw(&self) -> ApiResult<(Vec<u8>, bool)> {
        if let Some(cache) = &self.cache {
            if cache.exists(&self.cache_key).await? {
                info!("Loading holiday dataset from cache: {}", self.cache_key);
                return Ok((cache.read(&self.cache_key).await?, false));
            }
        }

        let raw = match self.source.fetch().await {
            Ok(raw) => raw,
            Err(primary) => match &self.fallback {
                Some(fallback) => {
                    warn!(
                        "Failed to fetch from {}: {}; using fallback data from {}",
                        self.source.describe(),
                        primary,
                        fallback.describe()
                    );
                    fallback.fetch().await.map_err(|e| {
                        warn!("Fallback source {} failed: {}", fallback.describe(), e);
                        primary
                    })?
                }
                None => return Err(primary),
            },
        };

        Ok((raw, true))
    }
}
