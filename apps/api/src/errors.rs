use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::lookup::civic_client::LookupError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Enhancement is not configured")]
    EnhancementUnconfigured,

    #[error("Enhancement failed: {0}")]
    EnhancementFailed(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        AppError::UpstreamUnavailable(e.to_string())
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::EnhancementFailed(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::UpstreamUnavailable(msg) => {
                tracing::warn!("Upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_UNAVAILABLE",
                    "Failed to look up postal code".to_string(),
                )
            }
            AppError::EnhancementUnconfigured => {
                tracing::error!("Enhancement requested but no API key is configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ENHANCEMENT_UNCONFIGURED",
                    "AI enhancement is not configured on the server".to_string(),
                )
            }
            AppError::EnhancementFailed(msg) => {
                tracing::error!("Enhancement error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ENHANCEMENT_FAILED",
                    "AI enhancement failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Converts a handler panic into the generic 500 response.
/// Used with `tower_http::catch_panic::CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
