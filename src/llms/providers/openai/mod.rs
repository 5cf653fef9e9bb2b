//! OpenAI chat-completions provider.
//!
//! Sends a single `POST {base_url}/chat/completions` request per call via
//! `reqwest` and maps every non-success answer onto [`CompletionError`].
//! Failed calls are not retried.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::llms::base_llm::{BaseLLM, CompletionRequest};
use crate::llms::error::CompletionError;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI-compatible completion client.
///
/// # Example
///
/// ```ignore
/// let provider = OpenAICompletion::new(Some(key), None, DEFAULT_TIMEOUT)?;
/// let text = provider.acall(&request).await?;
/// ```
#[derive(Clone)]
pub struct OpenAICompletion {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenAICompletion {
    /// Create a new provider.
    ///
    /// * `api_key` - bearer token; `None` makes every call fail with
    ///   [`CompletionError::MissingApiKey`] without touching the network.
    /// * `base_url` - override for the API root (defaults to [`DEFAULT_BASE_URL`]).
    /// * `timeout` - whole-request timeout applied by the HTTP client.
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url,
            timeout,
            client,
        })
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Get the API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Pull the generated text out of a Chat Completions response.
    ///
    /// A `null` or missing `content` yields an empty string; a response
    /// without any choice is malformed.
    fn parse_completions_response(response: &Value) -> Result<String, CompletionError> {
        let choice = response
            .get("choices")
            .and_then(|c| c.get(0))
            .ok_or_else(|| CompletionError::InvalidResponse("no choices in response".into()))?;

        let message = choice
            .get("message")
            .ok_or_else(|| CompletionError::InvalidResponse("no message in choice".into()))?;

        if let Some(usage) = response.get("usage") {
            log::debug!(
                "OpenAI token usage: prompt={}, completion={}, total={}",
                usage.get("prompt_tokens").and_then(|v| v.as_i64()).unwrap_or(0),
                usage.get("completion_tokens").and_then(|v| v.as_i64()).unwrap_or(0),
                usage.get("total_tokens").and_then(|v| v.as_i64()).unwrap_or(0),
            );
        }

        Ok(message
            .get("content")
            .and_then(|c| c.as_str())
            .unwrap_or("")
            .to_string())
    }
}

impl fmt::Debug for OpenAICompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAICompletion")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl BaseLLM for OpenAICompletion {
    fn provider(&self) -> &str {
        "openai"
    }

    async fn acall(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self.api_key.as_ref().ok_or(CompletionError::MissingApiKey)?;

        log::debug!(
            "OpenAICompletion.acall: model={}, messages={}",
            request.model,
            request.messages.len(),
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(CompletionError::from_status(status, &response_text));
        }

        let response_json: Value = serde_json::from_str(&response_text).map_err(|e| {
            CompletionError::InvalidResponse(format!(
                "{} - Body: {}",
                e,
                response_text.chars().take(500).collect::<String>()
            ))
        })?;

        Self::parse_completions_response(&response_json)
    }
}
