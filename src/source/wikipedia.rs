// Wikipedia fetcher — plain-text article extracts via the MediaWiki API.
//
// One GET per article against `action=query&prop=extracts&explaintext=1`.
// Redirects are followed server-side, so "Drake (rapper)" resolves to the
// canonical page. No retries: a failed fetch just yields an empty corpus.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::traits::DocumentFetcher;
use crate::config::Config;

/// Default MediaWiki API endpoint (English Wikipedia).
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Fetches article text from a MediaWiki instance.
pub struct WikipediaFetcher {
    client: reqwest::Client,
    api_url: String,
}

impl WikipediaFetcher {
    /// Create a fetcher for the given API endpoint.
    pub fn new(api_url: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.wiki_api_url,
            &config.user_agent,
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl DocumentFetcher for WikipediaFetcher {
    fn name(&self) -> &'static str {
        "wikipedia"
    }

    async fn fetch(&self, title: &str) -> Result<Option<String>> {
        if title.trim().is_empty() {
            return Ok(None);
        }

        debug!(title = title, url = %self.api_url, "Requesting article extract");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .send()
            .await
            .with_context(|| format!("Wikipedia request failed for '{title}'"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Wikipedia API returned {status} for '{title}': {body}");
        }

        let parsed: ExtractResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse Wikipedia response for '{title}'"))?;

        let Some(page) = first_page(parsed) else {
            return Ok(None);
        };
        if page.title != title {
            debug!(requested = title, resolved = %page.title, "Title resolved by redirect");
        }

        Ok(page_text(page))
    }
}

/// Parse a raw `formatversion=2` extracts response body.
///
/// Returns `None` when the page is missing or the title is invalid.
pub fn parse_extract_response(body: &str) -> Result<Option<String>> {
    let parsed: ExtractResponse =
        serde_json::from_str(body).context("Failed to parse Wikipedia response")?;
    Ok(first_page(parsed).and_then(page_text))
}

fn first_page(response: ExtractResponse) -> Option<ExtractPage> {
    response.query?.pages.into_iter().next()
}

fn page_text(page: ExtractPage) -> Option<String> {
    if page.missing || page.invalid {
        return None;
    }
    Some(page.extract.unwrap_or_default())
}

// -- Serde types for action=query&prop=extracts (formatversion=2) --

#[derive(Debug, Deserialize)]
pub struct ExtractResponse {
    pub query: Option<QueryResult>,
}

#[derive(Debug, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub pages: Vec<ExtractPage>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractPage {
    /// Canonical title after normalization and redirects
    #[serde(default)]
    pub title: String,
    pub extract: Option<String>,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_text_missing() {
        let body = r#"{"query":{"pages":[{"ns":0,"title":"Nope","missing":true}]}}"#;
        assert_eq!(parse_extract_response(body).unwrap(), None);
    }

    #[test]
    fn test_page_text_present() {
        let body = r#"{"query":{"pages":[{"pageid":1,"ns":0,"title":"T","extract":"Hello world"}]}}"#;
        assert_eq!(
            parse_extract_response(body).unwrap(),
            Some("Hello world".to_string())
        );
    }

    #[test]
    fn test_first_page_keeps_redirect_target() {
        let body = r#"{"query":{"redirects":[{"from":"Drake (rapper)","to":"Drake (musician)"}],
            "pages":[{"pageid":1,"ns":0,"title":"Drake (musician)","extract":"Rapper."}]}}"#;
        let parsed: ExtractResponse = serde_json::from_str(body).unwrap();
        let page = first_page(parsed).unwrap();
        assert_eq!(page.title, "Drake (musician)");
        assert_eq!(page_text(page), Some("Rapper.".to_string()));
    }
}
