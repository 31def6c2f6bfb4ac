//! OpenAI-compatible chat-completion client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::ContentAnalyzer;
use super::models::ContentData;
use super::schema::response_format;
use crate::config::AiConfig;
use crate::error::{ChatlensError, Result};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

/// Analyzer backed by a `/chat/completions` endpoint.
///
/// Sends exactly one request per call: no retries, no streaming.
pub struct OpenAiAnalyzer {
    client: Client,
    config: AiConfig,
}

impl OpenAiAnalyzer {
    /// Builds the HTTP client with the configured timeout.
    pub fn new(config: AiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds an analyzer from `OPENAI_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(AiConfig::from_env()?)
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    fn build_request<'a>(&'a self, text: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "developer",
                    content: &self.config.instructions,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            response_format: response_format(),
        }
    }
}

/// Pulls the message content out of a raw completion body.
fn extract_content(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)?;
    let message = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| ChatlensError::empty_response("response has no choices"))?;

    if let Some(refusal) = message.refusal.filter(|r| !r.is_empty()) {
        return Err(ChatlensError::empty_response(format!(
            "model refused: {refusal}"
        )));
    }

    message
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ChatlensError::empty_response("message has no content"))
}

#[async_trait]
impl ContentAnalyzer for OpenAiAnalyzer {
    fn name(&self) -> &'static str {
        "OpenAI"
    }

    async fn analyze(&self, text: &str) -> Result<ContentData> {
        let url = self.config.completions_url();
        debug!(%url, model = %self.config.model, bytes = text.len(), "requesting content analysis");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&self.build_request(text))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ChatlensError::api(status.as_u16(), body));
        }

        let content = extract_content(&body)?;
        debug!(bytes = content.len(), "received content analysis");
        ContentData::from_json(&content)
    }
}
