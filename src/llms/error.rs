//! Completion backend errors.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors returned by a [`BaseLLM`](super::BaseLLM) call.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No API key was configured; the request was never sent.
    #[error("completion API key is not configured")]
    MissingApiKey,

    /// The caller's quota or rate allowance is exhausted.
    #[error("rate limited or quota exhausted: {0}")]
    RateLimited(String),

    /// The API rejected the credentials.
    #[error("authentication failed ({status}): {message}")]
    AuthFailure { status: u16, message: String },

    /// Network-level failure (connect, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any other non-success answer from the API.
    #[error("completion API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered 2xx but the body did not have the expected shape.
    #[error("malformed completion response: {0}")]
    InvalidResponse(String),
}

impl CompletionError {
    /// Whether this failure means the API will keep refusing us.
    pub fn is_quota_exhausted(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }

    /// Classify a non-success HTTP answer from an OpenAI-compatible API.
    ///
    /// The body is expected to look like
    /// `{"error": {"message": "...", "type": "...", "code": "..."}}` but any
    /// text is accepted.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let error = parsed.as_ref().and_then(|v| v.get("error"));

        let field = |name: &str| {
            error
                .and_then(|e| e.get(name))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let error_type = field("type");
        let error_code = field("code");
        let mut message = field("message");
        if message.is_empty() {
            message = body.chars().take(500).collect();
        }

        let quota = status == StatusCode::TOO_MANY_REQUESTS
            || error_type == "insufficient_quota"
            || error_code == "insufficient_quota"
            || message.contains("quota");

        if quota {
            Self::RateLimited(message)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::AuthFailure {
                status: status.as_u16(),
                message,
            }
        } else {
            Self::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}
