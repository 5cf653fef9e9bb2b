//! Remote completion client.
//!
//! Wraps a [`BaseLLM`] backend with the assistant persona and turns every
//! outcome into visitor-facing text. Quota exhaustion trips the
//! [`ServiceAvailability`] latch, after which the backend is never called
//! again.

use std::sync::Arc;

use crate::llms::base_llm::BaseLLM;

use super::availability::ServiceAvailability;
use super::persona;

/// Returned without a network call once the API is marked unavailable.
pub const UNAVAILABLE_ANSWER: &str = "I don't have specific information about that, but I'd be happy to tell you about Hrishikesh's skills, projects, or experience. Is there something specific about Hrishikesh that you'd like to know?";

/// Returned when the API answered with empty content.
pub const EMPTY_COMPLETION_ANSWER: &str =
    "I'm sorry, I couldn't generate a response. Please try again.";

/// Returned for any failed remote call.
pub const APOLOGY_ANSWER: &str = "I'm sorry, I'm not able to answer that specific question right now. I can tell you about Hrishikesh's skills, projects, or experience if you're interested in learning more about those topics.";

#[derive(Debug, Clone)]
pub struct RemoteCompletionClient {
    backend: Arc<dyn BaseLLM>,
    availability: Arc<ServiceAvailability>,
}

impl RemoteCompletionClient {
    pub fn new(backend: Arc<dyn BaseLLM>) -> Self {
        Self::with_availability(backend, Arc::new(ServiceAvailability::new()))
    }

    pub fn with_availability(
        backend: Arc<dyn BaseLLM>,
        availability: Arc<ServiceAvailability>,
    ) -> Self {
        Self {
            backend,
            availability,
        }
    }

    pub fn availability(&self) -> &Arc<ServiceAvailability> {
        &self.availability
    }

    /// Ask the backend. Never fails; errors become [`APOLOGY_ANSWER`].
    pub async fn generate_response(&self, question: &str) -> String {
        if !self.availability.is_available() {
            tracing::debug!("completion API unavailable, using general fallback");
            return UNAVAILABLE_ANSWER.to_string();
        }

        tracing::debug!(provider = self.backend.provider(), "requesting remote completion");
        let request = persona::build_request(question);

        match self.backend.acall(&request).await {
            Ok(text) if text.is_empty() => {
                tracing::warn!("completion API returned empty content");
                EMPTY_COMPLETION_ANSWER.to_string()
            }
            Ok(text) => {
                tracing::info!("completion received");
                text
            }
            Err(error) => {
                tracing::error!(%error, "remote completion failed");
                if error.is_quota_exhausted() && self.availability.mark_unavailable() {
                    tracing::warn!("completion quota exhausted, switching to keyword-only mode");
                }
                APOLOGY_ANSWER.to_string()
            }
        }
    }
}
