use crate::application::services::holiday_dataset_service::HolidayDatasetService;
use crate::domain::entities::holiday::ResolvedDay;
use crate::domain::services::aggregator::{aggregate_by_month, aggregate_by_year};
use crate::domain::services::resolver::{resolve, resolve_range};
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use chrono::{Months, NaiveDate};

/// Query side used by the HTTP controllers.
#[derive(Clone)]
pub struct HolidayLookupService {
    datasets: HolidayDatasetService,
}

impl HolidayLookupService {
    pub fn new(datasets: HolidayDatasetService) -> Self {
        Self { datasets }
    }

    pub async fn check_date(&self, date: NaiveDate) -> ApiResult<ResolvedDay> {
        let dataset = self.datasets.dataset().await?;
        Ok(resolve(&dataset, date))
    }

    pub async fn month(&self, year: i32, month: u32) -> ApiResult<Vec<ResolvedDay>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ApiError::BadRequest(format!("Invalid month {}-{}", year, month)))?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| ApiError::BadRequest(format!("Invalid month {}-{}", year, month)))?;

        let dataset = self.datasets.dataset().await?;
        let days = resolve_range(&dataset, first, last)?;

        let key = format!("{:04}-{:02}", year, month);
        let mut months = aggregate_by_month(&days)?;
        Ok(months.remove(&key).unwrap_or_default())
    }

    pub async fn year(&self, year: i32) -> ApiResult<Vec<ResolvedDay>> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| ApiError::BadRequest(format!("Invalid year {}", year)))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| ApiError::BadRequest(format!("Invalid year {}", year)))?;

        let dataset = self.datasets.dataset().await?;
        let days = resolve_range(&dataset, first, last)?;

        let mut years = aggregate_by_year(&days)?;
        Ok(years.remove(&year).unwrap_or_default())
    }
}
