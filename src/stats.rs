//! # Derived Metrics
//! Four independent summary statistics over one analyzed batch: Shannon
//! diversity, knowledge/entertainment ratio, verified-account ratio, and
//! distribution skewness.
//!
//! Each is a pure function of its inputs with explicit fallback values for
//! degenerate input (empty batch, zero sums, tiny samples) — never an error
//! and never a NaN. Three read the normalized interest vector; the verified
//! ratio is the only one computed from the raw accounts.

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::taxonomy::{Category, ENTERTAINMENT_CATEGORIES, KNOWLEDGE_CATEGORIES};
use crate::vectorize::InterestVector;

/// The complete metrics package for one run. Recomputed fresh per batch,
/// never merged across runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Shannon entropy of the interest vector, in bits, rounded to 3 places.
    pub diversity_index: f64,
    /// Knowledge-sum / entertainment-sum, rounded to 2 places. `+inf` when
    /// the batch has knowledge weight but zero entertainment weight.
    pub knowledge_entertainment_ratio: f64,
    /// Fraction of accounts marked verified, in [0, 1], rounded to 2 places.
    pub celebrity_ratio: f64,
    /// Third standardized moment of the category percentages, rounded to 3
    /// places. Categories, not accounts, are the population.
    pub skewness: f64,
}

impl Metrics {
    /// Compute all four metrics with the built-in category subsets. The
    /// derivations are independent of each other; a degenerate input for one
    /// never affects the others.
    pub fn compute(accounts: &[Account], vector: &InterestVector) -> Self {
        Self {
            diversity_index: diversity_index(vector),
            knowledge_entertainment_ratio: knowledge_entertainment_ratio(
                vector,
                &KNOWLEDGE_CATEGORIES,
                &ENTERTAINMENT_CATEGORIES,
            ),
            celebrity_ratio: celebrity_ratio(accounts),
            skewness: skewness(vector),
        }
    }
}

/// Shannon entropy `H = -Σ p·log2(p)` over the vector's percentages read as
/// probabilities. Zero or absent weights are skipped (no `log2(0)`), so the
/// empty vector scores 0.0. Rounded to 3 decimal places.
pub fn diversity_index(vector: &InterestVector) -> f64 {
    let mut entropy = 0.0;
    for percentage in vector.values() {
        if percentage > 0.0 {
            let p = percentage / 100.0;
            entropy -= p * p.log2();
        }
    }
    round3(entropy)
}

/// Aggregated weight in `knowledge` categories divided by aggregated weight
/// in `entertainment` categories. A zero entertainment sum is an explicit
/// special case, not a division: `+inf` when any knowledge weight exists,
/// 0.0 otherwise. Rounded to 2 decimal places.
pub fn knowledge_entertainment_ratio(
    vector: &InterestVector,
    knowledge: &[Category],
    entertainment: &[Category],
) -> f64 {
    let knowledge_sum: f64 = knowledge.iter().map(|&c| vector.get(c)).sum();
    let entertainment_sum: f64 = entertainment.iter().map(|&c| vector.get(c)).sum();

    if entertainment_sum == 0.0 {
        return if knowledge_sum > 0.0 { f64::INFINITY } else { 0.0 };
    }
    round2(knowledge_sum / entertainment_sum)
}

/// Verified accounts over total accounts. Empty batch scores 0.0. Rounded to
/// 2 decimal places. The only metric read from raw accounts rather than the
/// normalized vector.
pub fn celebrity_ratio(accounts: &[Account]) -> f64 {
    if accounts.is_empty() {
        return 0.0;
    }
    let verified = accounts.iter().filter(|a| a.verified).count();
    round2(verified as f64 / accounts.len() as f64)
}

/// Population skewness of the category percentage values. Fewer than 3
/// entries is an insufficient sample and all-equal values are degenerate;
/// both score 0.0. Rounded to 3 decimal places.
pub fn skewness(vector: &InterestVector) -> f64 {
    let values: Vec<f64> = vector.values().collect();
    let n = values.len();
    if n < 3 {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    let std = variance.sqrt();
    if std == 0.0 {
        return 0.0;
    }

    let skew = values.iter().map(|x| ((x - mean) / std).powi(3)).sum::<f64>() / n as f64;
    round3(skew)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
