//! Error types for sentinel-api

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Body rejected by the JSON extractor (status taken from the rejection)
    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Vectorizer or classifier failure
    #[error("Inference failed: {0}")]
    Inference(#[from] sentinel_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Json(ref rejection) => {
                (rejection.status(), "INVALID_JSON", rejection.body_text())
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Inference(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INFERENCE_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
