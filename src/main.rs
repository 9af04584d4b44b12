use holidaybook::application::services::{HolidayDatasetService, HolidayLookupService};
use holidaybook::config::Config;
use holidaybook::domain::ports::{FileStorage, HolidaySource};
use holidaybook::infrastructure::http::middleware::AppState;
use holidaybook::infrastructure::http::router::build_router;
use holidaybook::infrastructure::observability;
use holidaybook::infrastructure::providers::HttpHolidaySource;
use holidaybook::infrastructure::storage::LocalFileStorage;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    observability::init()?;

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // One HTTP client for the lifetime of the process
    let source = Arc::new(HttpHolidaySource::new(
        config.upstream_api_url.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    )?) as Arc<dyn HolidaySource>;

    let cache = Arc::new(LocalFileStorage::new(config.cache_dir.clone())) as Arc<dyn FileStorage>;
    tracing::info!(
        "Holiday dataset cache: {}",
        config.cache_dir.join(&config.cache_key).display()
    );

    let datasets = HolidayDatasetService::new(source).with_cache(cache, config.cache_key.clone());
    let state = AppState::new(HolidayLookupService::new(datasets));

    // Build router
    let app = build_router(state);

    // Start server
    let addr = config.server_address();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
