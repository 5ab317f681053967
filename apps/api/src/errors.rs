use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::jobs::scraper::ScrapeError;
use crate::llm_client::LlmError;
use crate::render::RenderError;
use crate::tailoring::documents::DocumentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("LLM error: {0}")]
    Llm(String),

    /// The model answered, but not with the JSON we asked for.
    #[error("Malformed AI response: {0}")]
    MalformedAiResponse(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ScrapeError> for AppError {
    fn from(e: ScrapeError) -> Self {
        match e {
            ScrapeError::InvalidToken => AppError::Unauthorized(e.to_string()),
            ScrapeError::NoContent | ScrapeError::EmptyText => AppError::NotFound(e.to_string()),
            ScrapeError::Timeout => AppError::Timeout(e.to_string()),
            ScrapeError::Http(inner) => {
                AppError::Internal(anyhow::Error::new(inner).context("scraping failed"))
            }
            ScrapeError::Api { .. }
            | ScrapeError::RunFailed(_)
            | ScrapeError::NoDataset
            | ScrapeError::DatasetFetch => AppError::Upstream(e.to_string()),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Unauthorized => AppError::Unauthorized(
                "Invalid API key. Please check your Anthropic API key.".to_string(),
            ),
            LlmError::RateLimited { .. } => AppError::RateLimited(
                "Rate limited. Please wait a moment and try again.".to_string(),
            ),
            LlmError::Parse(inner) => AppError::MalformedAiResponse(format!(
                "Failed to parse AI response as JSON. Try again. Details: {inner}"
            )),
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl From<DocumentError> for AppError {
    fn from(e: DocumentError) -> Self {
        match e {
            DocumentError::Unsupported(_) => AppError::Validation(e.to_string()),
            other => AppError::UnprocessableEntity(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            AppError::RateLimited(msg) => {
                (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED", msg.clone())
            }
            AppError::Upstream(msg) => {
                tracing::warn!("Upstream error: {msg}");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg.clone())
            }
            AppError::Timeout(msg) => (StatusCode::GATEWAY_TIMEOUT, "TIMEOUT", msg.clone()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::MalformedAiResponse(msg) => {
                tracing::error!("Malformed AI response: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MALFORMED_AI_RESPONSE",
                    msg.clone(),
                )
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "PDF generation failed".to_string(),
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
