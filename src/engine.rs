//! # Analysis Engine
//! Thin composition layer over the numeric pipeline: aggregate the batch
//! into an interest vector, then derive the metrics from it. Pure and
//! synchronous; no I/O, no state across calls beyond the injected weights.
//!
//! Everything upstream (scraping, classification) and downstream (charting,
//! narration) lives outside this crate; the engine only fixes the contract
//! between the numeric stages.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::account::Account;
use crate::stats::Metrics;
use crate::vectorize::{build_interest_vector, InterestVector};
use crate::weights::AnalyzerWeights;

/// Result of one pipeline run over one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub interest_vector: InterestVector,
    pub metrics: Metrics,
}

/// The engine carries only its weights, passed in explicitly so tests can
/// run alternate sets. Construction is cheap; one engine per batch is fine.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    weights: AnalyzerWeights,
}

impl AnalysisEngine {
    pub fn new(weights: AnalyzerWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &AnalyzerWeights {
        &self.weights
    }

    /// Run the full numeric pipeline: vector first, metrics second (the
    /// metrics read the vector). Total over every well-typed input; the
    /// degenerate cases all resolve to the documented fallback values.
    pub fn analyze(&self, accounts: &[Account]) -> AnalysisResult {
        let interest_vector = build_interest_vector(accounts, &self.weights);
        let metrics = Metrics::compute(accounts, &interest_vector);
        debug!(
            accounts = accounts.len(),
            categories = interest_vector.len(),
            diversity = metrics.diversity_index,
            "batch analyzed"
        );
        AnalysisResult {
            interest_vector,
            metrics,
        }
    }
}
