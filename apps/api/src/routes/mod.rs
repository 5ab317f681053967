pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers::handle_scrape_jd;
use crate::render::handlers::handle_download_pdf;
use crate::state::AppState;
use crate::tailoring::handlers::{handle_answer_questions, handle_tailor};

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/scrape-jd", post(handle_scrape_jd))
        .route("/api/tailor", post(handle_tailor))
        .route("/api/answer-questions", post(handle_answer_questions))
        .route("/api/download-pdf", post(handle_download_pdf))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
