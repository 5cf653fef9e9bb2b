//! Completion backends for the assistant.
//!
//! - [`base_llm`] - the [`BaseLLM`] trait and request/message types
//! - [`error`] - the typed failure taxonomy
//! - [`providers`] - HTTP provider implementations

pub mod base_llm;
pub mod error;
pub mod providers;

pub use base_llm::{BaseLLM, CompletionRequest, LLMMessage, MessageRole};
pub use error::CompletionError;

#[cfg(test)]
pub(crate) mod stub;
