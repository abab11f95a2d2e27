use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{debug, error};

/// Handler failure, rendered with the fixed response shapes clients rely on.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn restaurant_not_found() -> Self {
        Self::NotFound("Restaurant not found".into())
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_validation() {
            return Self::Validation(e.to_string());
        }
        match e {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": msg}))).into_response()
            }
            ApiError::Validation(detail) => {
                // callers only ever see the generic message
                debug!(%detail, "request rejected");
                (StatusCode::BAD_REQUEST, Json(serde_json::json!({"errors": ["validation errors"]}))).into_response()
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({"error": "Internal Server Error"}))).into_response()
            }
        }
    }
}
