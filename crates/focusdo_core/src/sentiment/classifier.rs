//! Two-stage sentiment classifier with a background-loaded toxicity model.
//!
//! # Responsibility
//! - Run the deterministic keyword stage, then the probabilistic fallback.
//! - Manage the one-shot model slot filled by a background loader.
//!
//! # Invariants
//! - `classify` never returns an error; degradations are logged and mapped
//!   to a weaker result.
//! - The model slot is written at most once per process slot; a failed load
//!   leaves keyword-only behavior for the rest of the session.
//! - Classification must not block on the loader; the model is picked up
//!   silently on whichever call first observes the filled slot.

use crate::model::sentiment::{SentimentLabel, SentimentResult};
use crate::sentiment::lexicon::SentimentLexicon;
use log::{info, warn};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Probabilistic fallback classifier.
///
/// Implementations wrap whatever toxicity model is available; the pipeline
/// only needs a yes/no toxicity answer.
pub trait ToxicityModel: Send + Sync {
    /// Returns whether the model flags `text` as toxic.
    fn is_toxic(&self, text: &str) -> Result<bool, ToxicityModelError>;
}

/// Failure reported by a toxicity model load or inference call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToxicityModelError(pub String);

impl Display for ToxicityModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "toxicity model error: {}", self.0)
    }
}

impl Error for ToxicityModelError {}

/// One-shot shared slot the background loader fills.
///
/// Readers see `None` until the load completes; after that every classify
/// call upgrades silently to the model fallback.
pub struct ModelSlot {
    cell: OnceCell<Box<dyn ToxicityModel>>,
}

impl ModelSlot {
    /// Creates an empty shared slot.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            cell: OnceCell::new(),
        })
    }

    /// Installs a loaded model. Returns `false` when the slot was already
    /// filled (first load wins).
    pub fn install(&self, model: Box<dyn ToxicityModel>) -> bool {
        self.cell.set(model).is_ok()
    }

    /// Currently installed model, if the load has completed.
    pub fn get(&self) -> Option<&dyn ToxicityModel> {
        self.cell.get().map(Box::as_ref)
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Spawns the one-time background model load.
///
/// Best-effort: a load failure is logged and the slot stays empty, leaving
/// the classifier keyword-only for this session. There is no cancellation
/// and no retry.
pub fn spawn_model_load<F>(slot: Arc<ModelSlot>, loader: F) -> JoinHandle<()>
where
    F: FnOnce() -> Result<Box<dyn ToxicityModel>, ToxicityModelError> + Send + 'static,
{
    std::thread::spawn(move || match loader() {
        Ok(model) => {
            if slot.install(model) {
                info!("event=model_load module=sentiment status=ok");
            } else {
                warn!("event=model_load module=sentiment status=ignored note=slot_already_filled");
            }
        }
        Err(err) => {
            warn!(
                "event=model_load module=sentiment status=error error={err} note=keyword_only_fallback"
            );
        }
    })
}

/// Two-stage sentiment pipeline.
pub struct SentimentClassifier {
    lexicon: SentimentLexicon,
    model: Arc<ModelSlot>,
}

impl SentimentClassifier {
    /// Creates a classifier over a lexicon and a (possibly still empty)
    /// model slot.
    pub fn new(lexicon: SentimentLexicon, model: Arc<ModelSlot>) -> Self {
        Self { lexicon, model }
    }

    /// Default lexicon, no model loader attached.
    pub fn with_defaults() -> Self {
        Self::new(SentimentLexicon::default(), ModelSlot::empty())
    }

    /// Classifies free text.
    ///
    /// # Contract
    /// - Stage one: negative keywords first, then positive; a hit decides
    ///   the label immediately and is attached to the result.
    /// - Stage two (no keyword hit, model loaded): toxicity match maps to
    ///   `negative`, otherwise `positive`.
    /// - No keyword and no model: `neutral`. A model inference failure also
    ///   degrades to `neutral`.
    pub fn classify(&self, text: &str) -> SentimentResult {
        let lower = text.to_lowercase();

        if let Some(keyword) = self.lexicon.first_negative_match(&lower) {
            return SentimentResult::keyword(SentimentLabel::Negative, keyword);
        }
        if let Some(keyword) = self.lexicon.first_positive_match(&lower) {
            return SentimentResult::keyword(SentimentLabel::Positive, keyword);
        }

        match self.model.get() {
            Some(model) => match model.is_toxic(text) {
                Ok(true) => SentimentResult::plain(SentimentLabel::Negative),
                Ok(false) => SentimentResult::plain(SentimentLabel::Positive),
                Err(err) => {
                    warn!(
                        "event=model_classify module=sentiment status=error error={err} note=degraded_to_neutral"
                    );
                    SentimentResult::plain(SentimentLabel::Neutral)
                }
            },
            None => SentimentResult::plain(SentimentLabel::Neutral),
        }
    }
}
