//! # Portfolio assistant
//!
//! Backend for a personal portfolio site. It answers visitor questions with a
//! keyword table first and an external completion API second, and validates
//! contact form submissions.
//!
//! The completion API is disabled for the rest of the process once it reports
//! quota exhaustion; the keyword table keeps answering.

pub mod chat;
pub mod config;
pub mod llms;
pub mod server;

pub use chat::{KeywordRule, KeywordTable, LocalMatcher, RemoteCompletionClient, ResponseDispatcher};
pub use config::{ConfigError, ServerConfig};
pub use llms::{BaseLLM, CompletionError};
pub use server::{app_router, AppState};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
