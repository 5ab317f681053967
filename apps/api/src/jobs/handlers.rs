//! Axum route handlers for job-posting scraping.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::ExtractedMetadata;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScrapeJdRequest {
    #[serde(default)]
    pub apify_token: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ScrapeJdResponse {
    pub success: bool,
    pub text: String,
    pub title: String,
    pub metadata: ExtractedMetadata,
}

/// POST /api/scrape-jd
///
/// Crawls a job-posting URL and returns its text, title and inferred platform/company/position.
pub async fn handle_scrape_jd(
    State(state): State<AppState>,
    Json(request): Json<ScrapeJdRequest>,
) -> Result<Json<ScrapeJdResponse>, AppError> {
    let token = request.apify_token.trim();
    let url = request.url.trim();

    if token.is_empty() {
        return Err(AppError::Validation(
            "Apify API token is required.".to_string(),
        ));
    }
    if url.is_empty() {
        return Err(AppError::Validation("Job URL is required.".to_string()));
    }

    let page = state.scraper.scrape(token, url).await?;
    let metadata = page.extract();

    info!(
        "Scraped {} ({} chars): platform={}{}, quality={:?}",
        url,
        page.text.len(),
        metadata.platform,
        if metadata.is_unknown_platform() { " (unrecognized)" } else { "" },
        metadata.match_quality()
    );

    Ok(Json(ScrapeJdResponse {
        success: true,
        text: page.text,
        title: page.title,
        metadata,
    }))
}
