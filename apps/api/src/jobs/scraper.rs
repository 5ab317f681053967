//! Job-posting scraper backed by the Apify website-content-crawler actor.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::jobs::metadata::JobPostingSource;

const CRAWLER_ACTOR_ID: &str = "apify~website-content-crawler";
const DATASET_TIMEOUT: Duration = Duration::from_secs(30);
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Invalid Apify API token.")]
    InvalidToken,

    #[error("Apify API error: {status} {message}")]
    Api { status: u16, message: String },

    #[error("Apify crawl did not succeed (status: {0}). Try again.")]
    RunFailed(String),

    #[error("No dataset returned from Apify.")]
    NoDataset,

    #[error("Failed to fetch crawl results.")]
    DatasetFetch,

    #[error("No content was extracted from the URL. The page may require login.")]
    NoContent,

    #[error("Page was loaded but no text content was found.")]
    EmptyText,

    #[error("Apify request timed out. Try again.")]
    Timeout,

    #[error("Scraping failed: {0}")]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ScrapeError::Timeout
        } else {
            ScrapeError::Http(e)
        }
    }
}

/// Anything that can turn a job-posting URL into page title and text.
#[async_trait]
pub trait JobScraper: Send + Sync {
    async fn scrape(&self, token: &str, url: &str) -> Result<JobPostingSource, ScrapeError>;
}

#[derive(Debug, Deserialize)]
struct RunEnvelope {
    #[serde(default)]
    data: Option<RunData>,
}

#[derive(Debug, Deserialize)]
struct RunData {
    status: Option<String>,
    #[serde(rename = "defaultDatasetId")]
    default_dataset_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DatasetItem {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub metadata: Option<ItemMetadata>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    #[serde(default)]
    pub title: Option<String>,
}

/// Runs the crawler synchronously for a single page and reads back the dataset.
#[derive(Clone)]
pub struct ApifyScraper {
    client: Client,
    api_base: String,
    wait_for_finish_secs: u64,
    run_timeout: Duration,
}

impl ApifyScraper {
    pub fn new(
        client: Client,
        api_base: impl Into<String>,
        wait_for_finish_secs: u64,
        run_timeout: Duration,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            wait_for_finish_secs,
            run_timeout,
        }
    }

    async fn start_run(&self, token: &str, url: &str) -> Result<String, ScrapeError> {
        let run_url = format!("{}/acts/{CRAWLER_ACTOR_ID}/runs", self.api_base);
        let run_input = json!({
            "startUrls": [{ "url": url }],
            "maxCrawlPages": 1,
            "crawlerType": "playwright:firefox",
            "maxConcurrency": 1,
            "proxyConfiguration": { "useApifyProxy": true },
        });

        let response = self
            .client
            .post(&run_url)
            .query(&[
                ("token", token.to_string()),
                ("waitForFinish", self.wait_for_finish_secs.to_string()),
            ])
            .json(&run_input)
            .timeout(self.run_timeout)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ScrapeError::InvalidToken);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Apify run request returned {status}");
            return Err(ScrapeError::Api {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect(),
            });
        }

        let envelope: RunEnvelope = response.json().await?;
        dataset_id_from_run(envelope)
    }

    async fn fetch_items(&self, token: &str, dataset_id: &str) -> Result<Vec<DatasetItem>, ScrapeError> {
        let items_url = format!("{}/datasets/{dataset_id}/items", self.api_base);
        let response = self
            .client
            .get(&items_url)
            .query(&[("token", token), ("format", "json")])
            .timeout(DATASET_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Apify dataset fetch returned {}", response.status());
            return Err(ScrapeError::DatasetFetch);
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl JobScraper for ApifyScraper {
    async fn scrape(&self, token: &str, url: &str) -> Result<JobPostingSource, ScrapeError> {
        info!("Starting crawl for {url}");
        let dataset_id = self.start_run(token, url).await?;
        debug!("Crawl finished, dataset {dataset_id}");

        let items = self.fetch_items(token, &dataset_id).await?;
        page_from_items(url, items)
    }
}

fn dataset_id_from_run(envelope: RunEnvelope) -> Result<String, ScrapeError> {
    let data = envelope.data.unwrap_or(RunData {
        status: None,
        default_dataset_id: None,
    });

    let status = data.status.unwrap_or_else(|| "unknown".to_string());
    if status != "SUCCEEDED" {
        return Err(ScrapeError::RunFailed(status));
    }

    data.default_dataset_id
        .filter(|id| !id.is_empty())
        .ok_or(ScrapeError::NoDataset)
}

/// Builds the posting from the first crawled item.
///
/// The title prefers `metadata.title` and falls back to the top-level `title`.
pub fn page_from_items(url: &str, items: Vec<DatasetItem>) -> Result<JobPostingSource, ScrapeError> {
    let item = items.into_iter().next().ok_or(ScrapeError::NoContent)?;

    let text = item.text.unwrap_or_default();
    if text.is_empty() {
        return Err(ScrapeError::EmptyText);
    }

    let title = item
        .metadata
        .and_then(|m| m.title)
        .filter(|t| !t.is_empty())
        .or(item.title)
        .unwrap_or_default();

    Ok(JobPostingSource {
        url: url.to_string(),
        title,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> RunEnvelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_dataset_id_from_successful_run() {
        let run = envelope(r#"{"data": {"status": "SUCCEEDED", "defaultDatasetId": "ds-1"}}"#);
        assert_eq!(dataset_id_from_run(run).unwrap(), "ds-1");
    }

    #[test]
    fn test_dataset_id_from_failed_run() {
        let run = envelope(r#"{"data": {"status": "TIMED-OUT", "defaultDatasetId": "ds-1"}}"#);
        match dataset_id_from_run(run) {
            Err(ScrapeError::RunFailed(status)) => assert_eq!(status, "TIMED-OUT"),
            other => panic!("expected RunFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_dataset_id_missing_data_is_unknown_status() {
        match dataset_id_from_run(envelope("{}")) {
            Err(ScrapeError::RunFailed(status)) => assert_eq!(status, "unknown"),
            other => panic!("expected RunFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_dataset_id_missing_id() {
        let run = envelope(r#"{"data": {"status": "SUCCEEDED"}}"#);
        assert!(matches!(dataset_id_from_run(run), Err(ScrapeError::NoDataset)));
    }

    #[test]
    fn test_page_from_items_prefers_metadata_title() {
        let items: Vec<DatasetItem> = serde_json::from_str(
            r#"[{"text": "We are hiring", "title": "Top", "metadata": {"title": "Meta"}}]"#,
        )
        .unwrap();
        let page = page_from_items("https://example.com/job", items).unwrap();
        assert_eq!(page.title, "Meta");
        assert_eq!(page.text, "We are hiring");
        assert_eq!(page.url, "https://example.com/job");
    }

    #[test]
    fn test_page_from_items_falls_back_to_top_level_title() {
        let items: Vec<DatasetItem> = serde_json::from_str(
            r#"[{"text": "body", "title": "Top", "metadata": {"title": ""}}]"#,
        )
        .unwrap();
        assert_eq!(page_from_items("u", items).unwrap().title, "Top");
    }

    #[test]
    fn test_page_from_items_missing_title_is_empty() {
        let items: Vec<DatasetItem> = serde_json::from_str(r#"[{"text": "body"}]"#).unwrap();
        assert_eq!(page_from_items("u", items).unwrap().title, "");
    }

    #[test]
    fn test_page_from_items_empty_list() {
        assert!(matches!(
            page_from_items("u", vec![]),
            Err(ScrapeError::NoContent)
        ));
    }

    #[test]
    fn test_page_from_items_empty_text() {
        let items: Vec<DatasetItem> = serde_json::from_str(r#"[{"title": "T"}]"#).unwrap();
        assert!(matches!(
            page_from_items("u", items),
            Err(ScrapeError::EmptyText)
        ));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let scraper = ApifyScraper::new(
            Client::new(),
            "https://api.apify.com/v2/",
            120,
            Duration::from_secs(180),
        );
        assert_eq!(scraper.api_base, "https://api.apify.com/v2");
    }
}
