use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::jobs::JobScraper;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Shared HTTP connection pool for outbound API calls.
    pub http: Client,
    /// Pluggable scraper. Default: ApifyScraper.
    pub scraper: Arc<dyn JobScraper>,
}

impl AppState {
    /// LLM client bound to the caller-supplied API key.
    pub fn llm(&self, api_key: &str) -> LlmClient {
        LlmClient::new(
            self.http.clone(),
            api_key,
            self.config.anthropic_api_url.clone(),
        )
        .with_timeout(Duration::from_secs(self.config.llm_timeout_secs))
    }
}
