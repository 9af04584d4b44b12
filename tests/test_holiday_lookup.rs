mod helpers;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use helpers::*;
use holidaybook::application::services::{HolidayDatasetService, HolidayLookupService};
use holidaybook::infrastructure::http::middleware::AppState;
use holidaybook::infrastructure::http::router::build_router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(source: Arc<StaticSource>, cache: Arc<MemoryStorage>) -> Router {
    let datasets = HolidayDatasetService::new(source).with_cache(cache, "holiday-2024.json");
    build_router(AppState::new(HolidayLookupService::new(datasets)))
}

fn app() -> Router {
    app_with(StaticSource::ok(SAMPLE_DATASET), MemoryStorage::new())
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_check_holiday_new_year() {
    let (status, body) = send(app(), "GET", "/api/CheckHoliday?date=2024-01-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "_id": 1317,
            "date": "20240101",
            "name": "開國紀念日",
            "isHoliday": 1,
            "holidaycategory": "放假之紀念日及節日",
            "description": "全國各機關學校放假一日。"
        })
    );
}

#[tokio::test]
async fn test_check_holiday_post_is_accepted() {
    let (status, body) = send(app(), "POST", "/api/CheckHoliday?date=20240101").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isHoliday"], 1);
}

#[tokio::test]
async fn test_check_holiday_armed_forces_day() {
    let (status, body) = send(app(), "GET", "/api/CheckHoliday?date=2024-09-03").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "軍人節");
    assert_eq!(body["isHoliday"], 0);
}

#[tokio::test]
async fn test_check_holiday_first_match() {
    let (_, body) = send(app(), "GET", "/api/CheckHoliday?date=2024-02-10").await;

    assert_eq!(body["name"], "春節");
    assert_eq!(body["_id"], 1319);
}

#[tokio::test]
async fn test_check_holiday_unlisted_weekend_and_weekday() {
    // 2024-01-13 is a Saturday, 2024-01-15 a Monday
    let (status, saturday) = send(app(), "GET", "/api/CheckHoliday?date=2024-01-13").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        saturday,
        json!({
            "_id": 0,
            "date": "20240113",
            "name": "",
            "isHoliday": 0,
            "holidaycategory": "星期六、星期日",
            "description": ""
        })
    );

    let (_, monday) = send(app(), "GET", "/api/CheckHoliday?date=2024-01-15").await;
    assert_eq!(monday["holidaycategory"], "");
    assert_eq!(monday["isHoliday"], 0);
}

#[tokio::test]
async fn test_check_holiday_requires_date() {
    let (status, body) = send(app(), "GET", "/api/CheckHoliday").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("date"));
}

#[tokio::test]
async fn test_check_holiday_rejects_invalid_date() {
    let (status, _) = send(app(), "GET", "/api/CheckHoliday?date=2023-02-29").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let app = app_with(StaticSource::failing(), MemoryStorage::new());
    let (status, body) = send(app, "GET", "/api/CheckHoliday?date=2024-01-01").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_upstream_is_bad_gateway() {
    let source = StaticSource::ok(r#"{"result":{"results":"not-an-array"}}"#);
    let app = app_with(source, MemoryStorage::new());
    let (status, _) = send(app, "GET", "/api/CheckHoliday?date=2024-01-01").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_dataset_is_fetched_once_and_cached() {
    let source = StaticSource::ok(SAMPLE_DATASET);
    let cache = MemoryStorage::new();
    let app = app_with(source.clone(), cache.clone());

    send(app.clone(), "GET", "/api/CheckHoliday?date=2024-01-01").await;
    send(app, "GET", "/api/CheckHoliday?date=2024-01-02").await;

    assert_eq!(source.calls(), 1);
    assert_eq!(
        cache.get("holiday-2024.json").unwrap(),
        SAMPLE_DATASET.as_bytes()
    );
}

#[tokio::test]
async fn test_month_lookup() {
    let (status, body) = send(app(), "GET", "/api/holidays/2024/2").await;

    assert_eq!(status, StatusCode::OK);
    let days = body.as_array().unwrap();
    assert_eq!(days.len(), 29);
    assert_eq!(days[0]["date"], "20240201");
    assert_eq!(days[28]["date"], "20240229");
    assert_eq!(days[9]["name"], "春節");
}

#[tokio::test]
async fn test_year_lookup() {
    let (status, body) = send(app(), "GET", "/api/holidays/2024").await;

    assert_eq!(status, StatusCode::OK);
    let days = body.as_array().unwrap();
    assert_eq!(days.len(), 366);
    assert_eq!(days[0]["isHoliday"], 1);
    assert_eq!(days[365]["date"], "20241231");
}

#[tokio::test]
async fn test_month_lookup_rejects_bad_month() {
    let (status, _) = send(app(), "GET", "/api/holidays/2024/13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app(), "GET", "/api/holidays/0/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
