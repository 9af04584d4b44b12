use crate::domain::errors::DomainError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Upstream(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// A dataset that fails to parse came from upstream; everything else is ours
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MalformedJson(_)
            | DomainError::MissingField(_)
            | DomainError::InvalidEnumValue(_)
            | DomainError::InvalidDate(_) => {
                ApiError::Upstream(format!("Holiday dataset rejected: {}", err))
            }
            DomainError::InvalidRange { .. } => ApiError::BadRequest(err.to_string()),
            DomainError::InvariantViolation(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Upstream(format!("Upstream request timed out: {}", err))
        } else if err.is_connect() {
            ApiError::Upstream(format!("Upstream connection failed: {}", err))
        } else {
            ApiError::Upstream(format!("Upstream request failed: {}", err))
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
