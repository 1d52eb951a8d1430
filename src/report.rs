//! report.rs — Output contracts for the downstream collaborators.
//!
//! Two consumers sit behind the engine: a renderer that charts the interest
//! vector, and a narrator (an external text-generation call) that receives
//! only aggregate numbers. `NarratorInput` is that second contract, enforced
//! by construction: it carries the top categories and the four scalar
//! metrics, and has no field that could hold a username or bio.
//!
//! `render_text` is the human-facing console view (ASCII only, so output is
//! stable across terminals).

use serde::Serialize;
use std::fmt::Write as _;

use crate::engine::AnalysisResult;
use crate::stats::Metrics;
use crate::taxonomy::Category;

/// How many categories the narrator sees. The full vector stays inside the
/// process; truncation to the top entries happens here, not in the narrator.
pub const NARRATOR_TOP_N: usize = 5;

/// One category row as handed to the narrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCategory {
    pub category: Category,
    pub percentage: f64,
}

/// The complete numeric payload for the external narrator. Aggregates only —
/// no usernames, no bios, no per-account data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarratorInput {
    pub top_categories: Vec<TopCategory>,
    pub metrics: Metrics,
}

impl NarratorInput {
    /// Top-5 categories by percentage plus the metrics package.
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        let top_categories = result
            .interest_vector
            .top_n(NARRATOR_TOP_N)
            .into_iter()
            .map(|(category, percentage)| TopCategory {
                category,
                percentage: (percentage * 10.0).round() / 10.0,
            })
            .collect();
        Self {
            top_categories,
            metrics: result.metrics,
        }
    }
}

/// Accompanies every generated narrative.
pub const CONFIDENCE_NOTE: &str = "Note: This analysis is based on publicly visible \
following patterns and represents probabilistic indicators rather than definitive \
assessments.";

/// Accompanies every generated narrative.
pub const ETHICAL_DISCLAIMER: &str = "Ethical Notice: This tool is for educational \
self-analysis only. It should not be used for profiling others, making decisions \
about people, or any commercial purposes. All data is processed in-memory and not \
stored.";

/// Render the distribution and metrics as plain text: one bar row per
/// category (sorted descending), the four metric lines, and the two
/// standing notes every report carries.
pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str("INTEREST DISTRIBUTION\n");
    for (category, percentage) in result.interest_vector.top_n(usize::MAX) {
        // Scale: one '#' per 2 percent keeps the widest bar at 50 chars.
        let bar = "#".repeat((percentage / 2.0).max(0.0) as usize);
        let _ = writeln!(out, "{:<20} {:>5.1}% {}", category.as_str(), percentage, bar);
    }

    let m = &result.metrics;
    out.push_str("\nDERIVED METRICS\n");
    let _ = writeln!(out, "Diversity Index (Shannon Entropy): {:.3}", m.diversity_index);
    if m.knowledge_entertainment_ratio.is_infinite() {
        out.push_str("Knowledge/Entertainment Ratio:     inf\n");
    } else {
        let _ = writeln!(
            out,
            "Knowledge/Entertainment Ratio:     {:.2}",
            m.knowledge_entertainment_ratio
        );
    }
    let _ = writeln!(out, "Celebrity Ratio:                   {:.2}", m.celebrity_ratio);
    let _ = writeln!(out, "Distribution Skewness:             {:.3}", m.skewness);

    let _ = writeln!(out, "\n{CONFIDENCE_NOTE}");
    let _ = writeln!(out, "\n{ETHICAL_DISCLAIMER}");

    out
}
