pub mod error;

pub use error::{Result, SerperError};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Only the top organic results are kept; deeper hits are too noisy for
/// local-issue harvesting.
const MAX_RESULTS: usize = 5;

/// One organic search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<SearchResult>,
}

pub struct SerperClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl SerperClient {
    pub fn new(url: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            url: url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Run one web search and return the top organic results.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        debug!(query, "Serper search");

        let body = serde_json::json!({ "q": query });

        let resp = self
            .client
            .post(&self.url)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SerperError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = resp.json().await?;
        Ok(parsed.organic.into_iter().take(MAX_RESULTS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_tolerates_missing_fields() {
        let raw = r#"{
            "organic": [
                {"title": "Pothole repairs delayed", "snippet": "Crews behind schedule", "link": "https://example.com/1"},
                {"title": "Flood watch issued"}
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.organic.len(), 2);
        assert_eq!(
            parsed.organic[0].link.as_deref(),
            Some("https://example.com/1")
        );
        assert!(parsed.organic[1].snippet.is_none());
    }

    #[test]
    fn empty_response_parses_to_no_results() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.organic.is_empty());
    }
}
