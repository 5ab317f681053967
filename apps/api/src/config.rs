use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_APIFY_API_URL: &str = "https://api.apify.com/v2";

/// Application configuration loaded from environment variables.
/// Every variable has a default; API credentials arrive per request, not here.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Request body limit for uploads, in bytes.
    pub max_upload_bytes: usize,
    pub anthropic_api_url: String,
    pub apify_api_url: String,
    /// `waitForFinish` passed to the crawler run.
    pub scrape_wait_secs: u64,
    /// HTTP timeout for the crawler run request.
    pub scrape_timeout_secs: u64,
    /// Per-attempt HTTP timeout for LLM requests.
    pub llm_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            anthropic_api_url: DEFAULT_ANTHROPIC_API_URL.to_string(),
            apify_api_url: DEFAULT_APIFY_API_URL.to_string(),
            scrape_wait_secs: 120,
            scrape_timeout_secs: 180,
            llm_timeout_secs: 120,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            anthropic_api_url: std::env::var("ANTHROPIC_API_URL")
                .unwrap_or(defaults.anthropic_api_url),
            apify_api_url: std::env::var("APIFY_API_URL").unwrap_or(defaults.apify_api_url),
            scrape_wait_secs: parse_env("SCRAPE_WAIT_SECS", defaults.scrape_wait_secs)?,
            scrape_timeout_secs: parse_env("SCRAPE_TIMEOUT_SECS", defaults.scrape_timeout_secs)?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", defaults.llm_timeout_secs)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
