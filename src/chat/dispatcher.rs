//! Response dispatcher: keyword table first, completion API second.

use super::matcher::LocalMatcher;
use super::remote::RemoteCompletionClient;

/// Picks the answer for a visitor question.
///
/// A keyword hit is returned immediately and never touches the network. Only
/// questions the table cannot answer are sent to the remote client.
#[derive(Debug, Clone)]
pub struct ResponseDispatcher {
    matcher: LocalMatcher,
    remote: RemoteCompletionClient,
}

impl ResponseDispatcher {
    pub fn new(matcher: LocalMatcher, remote: RemoteCompletionClient) -> Self {
        Self { matcher, remote }
    }

    pub fn matcher(&self) -> &LocalMatcher {
        &self.matcher
    }

    pub fn remote(&self) -> &RemoteCompletionClient {
        &self.remote
    }

    pub async fn respond(&self, question: &str) -> String {
        if let Some(hit) = self.matcher.best_match(question) {
            tracing::debug!(rule = hit.index, score = hit.score, "answered from keyword table");
            return hit.answer.to_string();
        }

        tracing::debug!("no keyword match, falling back to completion API");
        self.remote.generate_response(question).await
    }
}
