//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `focusdo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use focusdo_core::{respond, SentimentClassifier};

fn main() {
    println!("focusdo_core ping={}", focusdo_core::ping());
    println!("focusdo_core version={}", focusdo_core::core_version());

    // Keyword-only probe; no model loader is attached here on purpose.
    let classifier = SentimentClassifier::with_defaults();
    let sample = "feeling productive today";
    let result = classifier.classify(sample);
    println!(
        "focusdo_core classify input={sample:?} label={:?} keyword={:?}",
        result.label, result.matched_keyword
    );
    println!("focusdo_core respond={}", respond(result.label, sample));
}
