//! Minimal Anthropic messages-API client for the model-backed collaborators.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    content: Vec<ContentBlock>,
}

pub struct LlmClient {
    api_key: String,
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            http: reqwest::Client::new(),
            base_url: ANTHROPIC_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// One system + user turn, concatenated text blocks back.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/messages", self.base_url);
        let request = ChatRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            system: system.to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: user.to_string(),
            }],
        };

        debug!(model = %request.model, "LLM chat request");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!("LLM API error ({}): {}", status, error_text));
        }

        let parsed: ChatResponse = response.json().await?;
        Ok(parsed
            .content
            .into_iter()
            .map(|block| block.text)
            .collect::<Vec<_>>()
            .join(""))
    }
}
