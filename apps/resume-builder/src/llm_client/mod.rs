//! LLM Client — the single point of entry for Claude API calls in the resume builder.
//!
//! One request per run. Failures are reported, never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub mod prompts;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Model used when neither the command line nor the environment names one.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
pub const DEFAULT_MAX_TOKENS: u32 = 3096;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Source of YAML resume text. `LlmClient` is the real backend; tests swap in fakes.
#[async_trait]
pub trait ResumeGenerator: Send + Sync {
    async fn generate_yaml(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Wraps the Anthropic Messages API for a single model.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: String,
    system: Option<String>,
}

impl LlmClient {
    pub fn new(api_key: String, model: String, max_tokens: u32) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            model,
            max_tokens,
            base_url: DEFAULT_BASE_URL.to_string(),
            system: None,
        })
    }

    /// Points the client at another host, e.g. a proxy speaking the same API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sends `system` alongside every prompt.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, MESSAGES_PATH)
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: self.system.as_deref(),
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!("POST {} (model={})", self.endpoint(), self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), body));
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl ResumeGenerator for LlmClient {
    /// Calls the model and returns the YAML body of its reply with any code fence removed.
    async fn generate_yaml(&self, prompt: &str) -> Result<String, LlmError> {
        info!("Requesting resume YAML from {}", self.model);
        let response = self.call(prompt).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;

        let yaml = strip_yaml_fences(text);
        if yaml.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(yaml.to_string())
    }
}

/// Builds an `Api` error, preferring the message from an Anthropic error body.
fn api_error(status: u16, body: String) -> LlmError {
    let message = serde_json::from_str::<AnthropicError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    LlmError::Api { status, message }
}

/// Returns the body of the first ```yaml, ```yml or bare ``` fence in LLM output.
/// Prose around the fence is dropped. Text without a fence is returned trimmed.
pub fn strip_yaml_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(start) = text.find("```") else {
        return text;
    };
    let rest = &text[start + 3..];
    let rest = rest
        .strip_prefix("yaml")
        .or_else(|| rest.strip_prefix("yml"))
        .unwrap_or(rest)
        .trim_start();
    match rest.find("```") {
        Some(end) => rest[..end].trim_end(),
        None => rest.trim_end(),
    }
}
