//! Keyword lexicon for the deterministic classification stage.
//!
//! # Responsibility
//! - Hold the configured negative/positive keyword sets.
//! - Answer lowercase substring-match queries in configuration order.
//!
//! # Invariants
//! - Keywords are stored lowercased; match input must be lowercased by the
//!   caller.
//! - Negative keywords always take precedence over positive ones at the
//!   pipeline level; this type only answers per-polarity queries.

/// Configured keyword sets. Injectable so tests can pin exact vocabularies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentLexicon {
    negative: Vec<String>,
    positive: Vec<String>,
}

impl SentimentLexicon {
    /// Builds a lexicon from caller-provided keyword sets.
    ///
    /// Keywords are lowercased; empty entries are dropped.
    pub fn new<N, P>(negative: N, positive: P) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            negative: normalize_keywords(negative),
            positive: normalize_keywords(positive),
        }
    }

    /// First configured negative keyword contained in `lower`, if any.
    pub fn first_negative_match<'a>(&'a self, lower: &str) -> Option<&'a str> {
        first_match(&self.negative, lower)
    }

    /// First configured positive keyword contained in `lower`, if any.
    pub fn first_positive_match<'a>(&'a self, lower: &str) -> Option<&'a str> {
        first_match(&self.positive, lower)
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new(
            [
                "sad",
                "depressed",
                "angry",
                "tired",
                "stressed",
                "anxious",
                "hopeless",
                "worthless",
                "die",
                "end it",
                "hate",
                "awful",
                "terrible",
            ],
            [
                "happy",
                "excited",
                "productive",
                "study",
                "motivated",
                "great",
                "good",
                "grateful",
                "energized",
                "focused",
            ],
        )
    }
}

fn normalize_keywords<I>(keywords: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    keywords
        .into_iter()
        .map(|keyword| keyword.into().trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

fn first_match<'a>(keywords: &'a [String], lower: &str) -> Option<&'a str> {
    keywords
        .iter()
        .find(|keyword| lower.contains(keyword.as_str()))
        .map(String::as_str)
}
