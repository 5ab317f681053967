//! Axum route handler for resume PDF download.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::render::{pdf_filename, render_resume};
use crate::tailoring::resume::TailoredResume;

/// POST /api/download-pdf
///
/// Renders the posted tailored resume and returns it as a PDF attachment.
pub async fn handle_download_pdf(Json(resume): Json<TailoredResume>) -> Result<Response, AppError> {
    if resume.is_empty() {
        return Err(AppError::Validation("No resume data provided.".to_string()));
    }

    let filename = pdf_filename(&resume.name);

    let bytes = tokio::task::spawn_blocking(move || render_resume(&resume))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF render task failed: {e}")))??;

    info!("Rendered {filename} ({} bytes)", bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
