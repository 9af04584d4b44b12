use crate::infrastructure::http::controllers::holidays;
use crate::infrastructure::http::middleware::AppState;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(holidays::health))
        .route(
            "/api/CheckHoliday",
            get(holidays::check_holiday).post(holidays::check_holiday),
        )
        .route("/api/holidays/:year", get(holidays::get_year))
        .route("/api/holidays/:year/:month", get(holidays::get_month))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
