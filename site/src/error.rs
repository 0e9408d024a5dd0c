//! Unified error types for the TC11 site service
//!
//! This module defines error types for each layer:
//! - `SourceError`: post source adapter errors (aggregator, Graph API, profile page)
//! - `StoreError`: fallback file errors
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Fallback file (`instagram.json`) errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Post source errors
///
/// Every variant is recoverable from the widget's point of view: callers
/// degrade to an empty post list and log a warning.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed payload: {0}")]
    Malformed(String),

    #[error("Fallback file error: {0}")]
    Store(#[from] StoreError),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Source(e) => {
                tracing::error!("Source error: {}", e);
                match e {
                    SourceError::Status { status, message } if *status == 404 => {
                        (StatusCode::NOT_FOUND, "Upstream not found", Some(message.clone()))
                    }
                    SourceError::Status { .. } | SourceError::Request(_) => {
                        (StatusCode::BAD_GATEWAY, "Upstream error", None)
                    }
                    SourceError::Malformed(msg) => (
                        StatusCode::BAD_GATEWAY,
                        "Malformed upstream payload",
                        Some(msg.clone()),
                    ),
                    SourceError::Store(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error",
                        None,
                    ),
                }
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::Unavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service unavailable",
                Some(msg.clone()),
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_formats_upstream_message() {
        let err = SourceError::Status {
            status: 503,
            message: "bridge down".to_string(),
        };
        assert_eq!(err.to_string(), "Upstream returned status 503: bridge down");
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn upstream_status_maps_to_bad_gateway() {
        let response = AppError::Source(SourceError::Status {
            status: 500,
            message: String::new(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn unavailable_maps_to_503() {
        let response = AppError::Unavailable("off".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
