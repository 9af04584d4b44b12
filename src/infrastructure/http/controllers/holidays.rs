use crate::{
    domain::entities::holiday::{parse_date, ResolvedDay},
    infrastructure::http::middleware::{ApiError, ApiResult, AppState},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CheckHolidayParams {
    pub date: Option<String>,
}

/// GET|POST /api/CheckHoliday?date=2024-01-01 - Holiday status of one date
pub async fn check_holiday(
    State(state): State<AppState>,
    Query(params): Query<CheckHolidayParams>,
) -> ApiResult<Json<ResolvedDay>> {
    let raw = params
        .date
        .ok_or_else(|| ApiError::BadRequest("Query parameter 'date' is required".to_string()))?;

    let date = parse_query_date(&raw)
        .ok_or_else(|| ApiError::BadRequest(format!("Unrecognized date {:?}", raw)))?;

    tracing::info!("Query for date: {}", date);

    let day = state.lookup_service.check_date(date).await?;
    Ok(Json(day))
}

/// GET /api/holidays/:year - Every day of a year
pub async fn get_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> ApiResult<Json<Vec<ResolvedDay>>> {
    validate_year(year)?;
    let days = state.lookup_service.year(year).await?;
    Ok(Json(days))
}

/// GET /api/holidays/:year/:month - Every day of a month
pub async fn get_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> ApiResult<Json<Vec<ResolvedDay>>> {
    validate_year(year)?;
    if !(1..=12).contains(&month) {
        return Err(ApiError::BadRequest(format!(
            "Month must be between 1 and 12, got {}",
            month
        )));
    }

    let days = state.lookup_service.month(year, month).await?;
    Ok(Json(days))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn validate_year(year: i32) -> ApiResult<()> {
    if (1..=9999).contains(&year) {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "Year must be between 1 and 9999, got {}",
            year
        )))
    }
}

/// Accepts `YYYY-MM-DD`, `YYYYMMDD`, `YYYY/MM/DD` and full timestamps.
pub fn parse_query_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Some(date) = parse_date(raw) {
        return Some(date);
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|timestamp| timestamp.date())
}
