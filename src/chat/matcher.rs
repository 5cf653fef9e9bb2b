//! Local keyword matcher.

use std::sync::Arc;

use super::answers::KeywordTable;

/// The winning rule for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Position of the rule in the table.
    pub index: usize,
    /// The rule's canned answer.
    pub answer: &'a str,
    /// Number of the rule's keywords found in the question.
    pub score: usize,
}

/// Scores questions against a [`KeywordTable`].
///
/// Matching is case-insensitive substring search. The rule with the most
/// keyword hits wins; on a tie the earlier rule is kept.
#[derive(Debug, Clone)]
pub struct LocalMatcher {
    table: Arc<KeywordTable>,
}

impl LocalMatcher {
    pub fn new(table: KeywordTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Best-scoring rule with at least one hit.
    pub fn best_match(&self, question: &str) -> Option<Match<'_>> {
        let lower_question = question.to_lowercase();
        let mut best: Option<Match<'_>> = None;

        for (index, rule) in self.table.rules().iter().enumerate() {
            let score = rule.score(&lower_question);
            let current = best.map_or(0, |m| m.score);
            if score > current {
                best = Some(Match {
                    index,
                    answer: rule.answer(),
                    score,
                });
            }
        }

        best
    }

    /// Canned answer for a confident match, `None` otherwise.
    pub fn lookup(&self, question: &str) -> Option<&str> {
        self.best_match(question).map(|m| m.answer)
    }

    /// Canned answer for the question, or the table's default answer.
    pub fn find_answer(&self, question: &str) -> &str {
        self.lookup(question)
            .unwrap_or_else(|| self.table.default_answer())
    }
}

impl Default for LocalMatcher {
    fn default() -> Self {
        Self::new(KeywordTable::default())
    }
}
