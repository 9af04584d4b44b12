use anyhow::Context;
use holidaybook::application::services::{
    GenerationSettings, HolidayDatasetService, StaticSiteGenerator,
};
use holidaybook::config::Config;
use holidaybook::domain::ports::{Clock, FileStorage, HolidaySource};
use holidaybook::infrastructure::observability;
use holidaybook::infrastructure::providers::{FileHolidaySource, HttpHolidaySource};
use holidaybook::infrastructure::runtime::SystemClock;
use holidaybook::infrastructure::storage::LocalFileStorage;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("Static generation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    observability::init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialise tracing")?;

    tracing::info!("Holiday Book Static Generator");

    let config = Config::from_env().context("invalid configuration")?;

    let source = Arc::new(
        HttpHolidaySource::new(
            config.upstream_api_url.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )
        .context("failed to build upstream client")?,
    ) as Arc<dyn HolidaySource>;
    let fallback =
        Arc::new(FileHolidaySource::new(config.fallback_data_path.clone())) as Arc<dyn HolidaySource>;

    // Always fetch fresh data; the fallback file only covers upstream outages
    let datasets = HolidayDatasetService::new(source).with_fallback(fallback);

    let output = Arc::new(LocalFileStorage::new(config.output_dir.clone())) as Arc<dyn FileStorage>;
    let clock = Arc::new(SystemClock::new()) as Arc<dyn Clock>;

    let generator = StaticSiteGenerator::new(
        datasets,
        output,
        clock,
        GenerationSettings {
            start_date: config.generation_start_date,
            years_to_generate: config.years_to_generate,
        },
    );

    let report = generator
        .generate()
        .await
        .context("static generation aborted")?;

    tracing::info!(
        "Generated {} JSON files in '{}'",
        report.days + report.months + report.years,
        config.output_dir.display()
    );

    Ok(())
}
