//! Canned response selection and focus quotes.
//!
//! # Responsibility
//! - Map `(label, lowercased input)` to one canned message via an ordered
//!   rule table.
//! - Provide the motivational focus quotes shown on the landing surface.
//!
//! # Invariants
//! - Rules are evaluated strictly top to bottom; the first match wins.
//! - Empty/whitespace-only input selects the prompt message regardless of
//!   label.
//! - The table is configuration, not learned; changing copy means editing
//!   `RESPONSE_RULES` only.

use crate::model::sentiment::SentimentLabel;

/// Prompt shown when there is nothing to analyze.
pub const EMPTY_INPUT_PROMPT: &str = "Please enter something so I can help you better. 🤔";

const NEUTRAL_FALLBACK: &str = "Thanks for sharing. Let's make the most of today. 🌱";

/// Motivational quotes for the landing surface.
pub const FOCUS_QUOTES: &[&str] = &[
    "Stay focused and never give up.",
    "Today is a new chance to grow.",
    "Small steps every day lead to big changes.",
    "Discipline is the bridge between goals and accomplishment.",
    "You are capable of amazing things.",
];

enum RulePredicate {
    /// Input trims to empty, any label.
    EmptyInput,
    /// Label matches and the input contains one of the secondary keywords.
    LabelWithKeyword {
        label: SentimentLabel,
        keywords: &'static [&'static str],
    },
    /// Label matches unconditionally.
    LabelFallback(SentimentLabel),
}

struct ResponseRule {
    predicate: RulePredicate,
    message: &'static str,
}

/// The full `(predicate, message)` table, highest priority first.
///
/// Within `negative`, self-harm-indicative keywords select the distinct
/// higher-concern message before any other negative rule can match.
const RESPONSE_RULES: &[ResponseRule] = &[
    ResponseRule {
        predicate: RulePredicate::EmptyInput,
        message: EMPTY_INPUT_PROMPT,
    },
    ResponseRule {
        predicate: RulePredicate::LabelWithKeyword {
            label: SentimentLabel::Negative,
            keywords: &["die", "worthless", "end it"],
        },
        message: "I'm really concerned about how you're feeling. Please consider talking to \
                  someone you trust or reaching out to a mental health professional. You matter. ❤️",
    },
    ResponseRule {
        predicate: RulePredicate::LabelWithKeyword {
            label: SentimentLabel::Negative,
            keywords: &["sad", "depressed"],
        },
        message: "I'm here for you. It's okay to feel this way—you're not alone. 💙 Take it one \
                  step at a time.",
    },
    ResponseRule {
        predicate: RulePredicate::LabelFallback(SentimentLabel::Negative),
        message: "Feeling low happens, but you're stronger than you think. Let's turn this day \
                  around together. 🌈",
    },
    ResponseRule {
        predicate: RulePredicate::LabelWithKeyword {
            label: SentimentLabel::Positive,
            keywords: &["productive", "study"],
        },
        message: "Awesome! You're in the zone. 📚 Keep pushing forward!",
    },
    ResponseRule {
        predicate: RulePredicate::LabelWithKeyword {
            label: SentimentLabel::Positive,
            keywords: &["happy", "excited"],
        },
        message: "Love the vibe! Keep spreading that positive energy. ✨",
    },
    ResponseRule {
        predicate: RulePredicate::LabelFallback(SentimentLabel::Positive),
        message: "Glad to hear that! Keep up the good energy today. 💪",
    },
    ResponseRule {
        predicate: RulePredicate::LabelFallback(SentimentLabel::Neutral),
        message: NEUTRAL_FALLBACK,
    },
];

impl RulePredicate {
    fn matches(&self, label: SentimentLabel, lower: &str) -> bool {
        match self {
            Self::EmptyInput => lower.trim().is_empty(),
            Self::LabelWithKeyword {
                label: rule_label,
                keywords,
            } => *rule_label == label && keywords.iter().any(|keyword| lower.contains(keyword)),
            Self::LabelFallback(rule_label) => *rule_label == label,
        }
    }
}

/// Selects the canned response for a label and the raw analyzed text.
///
/// Pure function of its inputs; the raw text is lowercased once for the
/// secondary keyword checks.
pub fn respond(label: SentimentLabel, raw_text: &str) -> &'static str {
    let lower = raw_text.to_lowercase();
    for rule in RESPONSE_RULES {
        if rule.predicate.matches(label, &lower) {
            return rule.message;
        }
    }
    // Table ends with per-label fallbacks, so this is only reachable if a
    // new label is added without extending the table.
    NEUTRAL_FALLBACK
}

/// Deterministic quote selection used by tests and stable surfaces.
pub fn focus_quote_at(index: usize) -> &'static str {
    FOCUS_QUOTES[index % FOCUS_QUOTES.len()]
}

/// Arbitrary quote for the landing surface.
pub fn random_focus_quote() -> &'static str {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos() as usize)
        .unwrap_or(0);
    focus_quote_at(nanos)
}
