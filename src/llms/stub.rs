//! Counting stub backend for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::base_llm::{BaseLLM, CompletionRequest};
use super::error::CompletionError;

/// What the stub answers with.
#[derive(Debug, Clone)]
pub enum Scripted {
    Text(String),
    RateLimited,
    AuthFailure,
    ServerError,
    MissingKey,
}

/// Backend that replays a scripted outcome, counts calls and keeps the last
/// request it saw.
#[derive(Debug)]
pub struct StubLLM {
    outcome: Mutex<Scripted>,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl StubLLM {
    pub fn new(outcome: Scripted) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(Scripted::Text(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }

    pub fn set_outcome(&self, outcome: Scripted) {
        *self.outcome.lock().unwrap() = outcome;
    }
}

#[async_trait]
impl BaseLLM for StubLLM {
    fn provider(&self) -> &str {
        "stub"
    }

    async fn acall(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        let outcome = self.outcome.lock().unwrap().clone();
        match outcome {
            Scripted::Text(text) => Ok(text),
            Scripted::RateLimited => Err(CompletionError::RateLimited(
                "You exceeded your current quota".to_string(),
            )),
            Scripted::AuthFailure => Err(CompletionError::AuthFailure {
                status: 401,
                message: "Incorrect API key provided".to_string(),
            }),
            Scripted::ServerError => Err(CompletionError::Api {
                status: 500,
                message: "internal error".to_string(),
            }),
            Scripted::MissingKey => Err(CompletionError::MissingApiKey),
        }
    }
}
