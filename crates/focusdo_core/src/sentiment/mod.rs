//! Sentiment analysis pipeline.
//!
//! # Responsibility
//! - Classify free text via keyword rules with a toxicity-model fallback.
//! - Map the resulting label to canned encouragement messages.
//!
//! # Invariants
//! - Classification never returns an error to the caller; a missing or
//!   failing model degrades the result instead.
//! - Negative keywords are checked strictly before positive keywords.
//! - Model loading is background, best-effort and one-shot per slot.

pub mod classifier;
pub mod lexicon;
pub mod responder;

pub use classifier::{
    spawn_model_load, ModelSlot, SentimentClassifier, ToxicityModel, ToxicityModelError,
};
pub use lexicon::SentimentLexicon;
pub use responder::{
    focus_quote_at, random_focus_quote, respond, EMPTY_INPUT_PROMPT, FOCUS_QUOTES,
};
