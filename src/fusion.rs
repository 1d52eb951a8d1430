//! Signal fusion: two classifier signals in, one strength scalar out.
//!
//! `strength = from_instagram_category * w_instagram_category + from_bio * w_bio`
//!
//! With the default weights (0.6 / 0.4, summing to 1.0) the result stays in
//! [0, 1] whenever the inputs do. No clamping or range validation happens
//! here: the classifier's contract is to emit signals in [0, 1], and
//! out-of-range inputs propagate silently. That is a documented boundary
//! risk, not something this function papers over; strict callers can reject
//! bad signals in `ingest` before they ever reach the engine.

use crate::account::ClassificationSignal;
use crate::weights::AnalyzerWeights;

/// Combine the two per-account relevance signals into one strength scalar.
/// Pure, no side effects.
pub fn fuse_signals(signals: &ClassificationSignal, weights: &AnalyzerWeights) -> f64 {
    signals.from_instagram_category * weights.w_instagram_category
        + signals.from_bio * weights.w_bio
}
