use crate::application::services::holiday_dataset_service::HolidayDatasetService;
use crate::domain::errors::DomainError;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::file_storage::FileStorage;
use crate::domain::services::aggregator::{aggregate_by_month, aggregate_by_year};
use crate::domain::services::resolver::resolve_range;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
pub struct GenerationSettings {
    pub start_date: NaiveDate,
    pub years_to_generate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationReport {
    pub days: usize,
    pub months: usize,
    pub years: usize,
}

/// Regenerates the static JSON tree: one file per day, month and year.
pub struct StaticSiteGenerator {
    datasets: HolidayDatasetService,
    output: Arc<dyn FileStorage>,
    clock: Arc<dyn Clock>,
    settings: GenerationSettings,
}

impl StaticSiteGenerator {
    pub fn new(
        datasets: HolidayDatasetService,
        output: Arc<dyn FileStorage>,
        clock: Arc<dyn Clock>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            datasets,
            output,
            clock,
            settings,
        }
    }

    /// Last generated date: today plus the configured number of years.
    /// Feb 29 clamps to Feb 28 when the target year is not a leap year.
    pub fn end_date(&self) -> ApiResult<NaiveDate> {
        let today = self.clock.today();
        today
            .checked_add_months(Months::new(12 * self.settings.years_to_generate))
            .ok_or_else(|| {
                ApiError::Internal(format!(
                    "{} + {} years is out of range",
                    today, self.settings.years_to_generate
                ))
            })
    }

    pub async fn generate(&self) -> ApiResult<GenerationReport> {
        let dataset = self.datasets.load().await?;

        let start = self.settings.start_date;
        let end = self.end_date()?;
        info!("Generating holiday files from {} to {}", start, end);

        // Fail on a bad range before touching the output directory
        let days = resolve_range(&dataset, start, end)?;
        let months = aggregate_by_month(&days)?;
        let years = aggregate_by_year(&days)?;

        self.output.clear().await?;

        for day in &days {
            let date = day.calendar_date().ok_or_else(|| {
                DomainError::InvariantViolation(format!(
                    "resolved day has unparseable date {:?}",
                    day.date
                ))
            })?;
            let key = format!("{}.json", date.format("%Y-%m-%d"));
            self.write_json(&key, day).await?;
        }
        debug!("Wrote {} daily files", days.len());

        for (month, group) in &months {
            self.write_json(&format!("{}.json", month), group).await?;
        }
        debug!("Wrote {} monthly files", months.len());

        for (year, group) in &years {
            self.write_json(&format!("{}.json", year), group).await?;
        }
        debug!("Wrote {} yearly files", years.len());

        let report = GenerationReport {
            days: days.len(),
            months: months.len(),
            years: years.len(),
        };
        info!(
            "Generated {} daily, {} monthly and {} yearly files",
            report.days, report.months, report.years
        );

        Ok(report)
    }

    async fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> ApiResult<()> {
        let body = serde_json::to_vec(value)
            .map_err(|e| ApiError::Internal(format!("Failed to serialize {}: {}", key, e)))?;
        self.output.save(key, &body).await
    }
}
