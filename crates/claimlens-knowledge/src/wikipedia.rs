//! Wikipedia REST source

use async_trait::async_trait;
use claimlens_domain::traits::{ArticleSummary, KnowledgeError, KnowledgeSource};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const SUMMARY_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Looks up claims against Wikipedia's page-summary REST endpoint.
///
/// The claim text is used verbatim as the page title query (spaces become
/// underscores, Wikipedia-title style). A 404 means no matching article,
/// which is a normal outcome, not an error.
pub struct WikipediaSource {
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct SummaryPayload {
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Deserialize)]
struct ContentUrls {
    desktop: PageUrl,
}

#[derive(Deserialize)]
struct PageUrl {
    page: String,
}

impl WikipediaSource {
    /// Create a Wikipedia source
    pub fn new() -> Result<Self, KnowledgeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| KnowledgeError::Http(format!("client build failed: {}", e)))?;
        Ok(Self { client })
    }

    fn summary_url(query: &str) -> Result<reqwest::Url, KnowledgeError> {
        let mut url = reqwest::Url::parse(SUMMARY_ENDPOINT)
            .map_err(|e| KnowledgeError::Http(format!("bad endpoint: {}", e)))?;
        let title = query.trim().replace(' ', "_");
        // Pushed as a single path segment so `?`, `#` and `/` in claim text
        // are percent-encoded instead of splitting the URL
        url.path_segments_mut()
            .map_err(|_| KnowledgeError::Http("endpoint cannot carry a title".to_string()))?
            .pop_if_empty()
            .push(&title);
        Ok(url)
    }
}

#[async_trait]
impl KnowledgeSource for WikipediaSource {
    async fn lookup(&self, query: &str) -> Result<Option<ArticleSummary>, KnowledgeError> {
        let url = Self::summary_url(query)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| KnowledgeError::Http(format!("request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!(query, "no matching article");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(KnowledgeError::Http(format!(
                "summary endpoint returned HTTP {}",
                response.status()
            )));
        }

        let payload: SummaryPayload = response
            .json()
            .await
            .map_err(|e| KnowledgeError::Parse(format!("summary decode failed: {}", e)))?;

        let url = match payload.content_urls {
            Some(urls) => urls.desktop.page,
            // A summary payload without a canonical URL is not a usable hit
            None => {
                debug!(query, "summary payload had no canonical url");
                return Ok(None);
            }
        };

        Ok(Some(ArticleSummary {
            url,
            summary: payload.extract.filter(|s| !s.trim().is_empty()),
        }))
    }
}
