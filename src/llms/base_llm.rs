//! Base trait for chat-completion backends.
//!
//! The assistant only ever needs a single non-streaming completion: a system
//! persona followed by one user message. [`BaseLLM`] captures that call so the
//! remote client can run against the real HTTP provider in production and a
//! counting stub in tests.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::CompletionError;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Author of a message in a completion conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single message in a completion conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LLMMessage {
    pub role: MessageRole,
    pub content: String,
}

impl LLMMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Body of a chat-completions call.
///
/// Serializes directly to the OpenAI `POST /chat/completions` request shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier, e.g. `gpt-3.5-turbo`.
    pub model: String,
    /// Conversation, system message first.
    pub messages: Vec<LLMMessage>,
    /// Sampling temperature.
    pub temperature: f64,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// The last user message, if any.
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map(|m| m.content.as_str())
    }
}

// ---------------------------------------------------------------------------
// BaseLLM trait
// ---------------------------------------------------------------------------

/// A chat-completion backend.
///
/// Implementations make exactly one attempt per call. They report failures
/// through [`CompletionError`] so callers can branch on the failure kind
/// (quota exhaustion in particular) instead of inspecting error strings.
#[async_trait]
pub trait BaseLLM: Send + Sync + fmt::Debug {
    /// Provider name used in logs.
    fn provider(&self) -> &str {
        "openai"
    }

    /// Run one completion and return the generated text.
    ///
    /// An `Ok` with an empty string means the API answered but produced no
    /// content.
    async fn acall(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_chat_completions_shape() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![LLMMessage::system("persona"), LLMMessage::user("hi there")],
            temperature: 0.7,
            max_tokens: 300,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hi there");
        assert_eq!(json["max_tokens"], 300);
    }

    #[test]
    fn test_user_prompt_picks_last_user_message() {
        let request = CompletionRequest {
            model: "m".to_string(),
            messages: vec![
                LLMMessage::system("persona"),
                LLMMessage::user("first"),
                LLMMessage::user("second"),
            ],
            temperature: 0.0,
            max_tokens: 1,
        };
        assert_eq!(request.user_prompt(), Some("second"));
    }
}
