mod config;
mod errors;
mod jobs;
mod llm_client;
mod render;
mod routes;
mod state;
mod tailoring;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::ApifyScraper;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    // One connection pool for the crawler and the LLM.
    let http = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
        .context("failed to build HTTP client")?;

    let scraper = ApifyScraper::new(
        http.clone(),
        config.apify_api_url.clone(),
        config.scrape_wait_secs,
        Duration::from_secs(config.scrape_timeout_secs),
    );
    info!(
        "Scraper initialized (api: {}, waitForFinish: {}s)",
        config.apify_api_url, config.scrape_wait_secs
    );
    info!("LLM model: {}", llm_client::MODEL);

    let state = AppState {
        config: config.clone(),
        http,
        scraper: Arc::new(scraper),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
