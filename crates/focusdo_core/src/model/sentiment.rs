//! Sentiment classification result types.

use serde::{Deserialize, Serialize};

/// Sentiment label produced by the classification pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Outcome of one classification. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Lexicon keyword that decided the label, when stage one matched.
    pub matched_keyword: Option<String>,
}

impl SentimentResult {
    /// Result for a keyword hit from the deterministic stage.
    pub fn keyword(label: SentimentLabel, keyword: impl Into<String>) -> Self {
        Self {
            label,
            matched_keyword: Some(keyword.into()),
        }
    }

    /// Result decided without a keyword (model fallback or neutral default).
    pub fn plain(label: SentimentLabel) -> Self {
        Self {
            label,
            matched_keyword: None,
        }
    }
}
