//! account.rs — Typed data model for one classified account.
//!
//! These are the records the external classifier hands to the engine, after
//! the `ingest` boundary has validated the category labels. Everything here
//! is immutable once built and owned by the batch being processed; nothing
//! is persisted.

use serde::{Deserialize, Serialize};

use crate::taxonomy::Category;

/// The two independent relevance signals the classifier reports for one
/// account: how much the platform's own category field drove the call, and
/// how much the bio text did. Both live in [0.0, 1.0] by the classifier's
/// contract; the engine does not re-validate the range (see `fusion`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSignal {
    #[serde(default)]
    pub from_instagram_category: f64,
    #[serde(default)]
    pub from_bio: f64,
}

impl ClassificationSignal {
    pub fn new(from_instagram_category: f64, from_bio: f64) -> Self {
        Self {
            from_instagram_category,
            from_bio,
        }
    }

    /// Zero signal, used by the fallback classification.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// One classification verdict for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub primary_category: Category,
    /// Absent means the classifier saw no meaningful second interest.
    /// This is the only "no secondary" state the engine knows about; the
    /// classifier's literal `"null"` string is normalized away in `ingest`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_category: Option<Category>,
    pub signals: ClassificationSignal,
    /// Overall classifier confidence in [0.0, 1.0].
    pub confidence: f64,
}

impl Classification {
    pub fn new(
        primary_category: Category,
        secondary_category: Option<Category>,
        signals: ClassificationSignal,
        confidence: f64,
    ) -> Self {
        Self {
            primary_category,
            secondary_category,
            signals,
            confidence,
        }
    }

    /// Fixed low-confidence placeholder substituted for a failed or invalid
    /// upstream classification: catch-all category, no secondary, zero
    /// signals, confidence 0.1. Aggregates to zero weight, so a broken
    /// classification cannot tilt the interest vector.
    pub fn fallback() -> Self {
        Self {
            primary_category: Category::Other,
            secondary_category: None,
            signals: ClassificationSignal::zero(),
            confidence: 0.1,
        }
    }
}

/// One account from the scraped batch, enriched with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    #[serde(default)]
    pub bio: String,
    /// The platform's own category field, when the profile exposes one.
    /// Raw scraper output; only the classifier interprets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_hint: Option<String>,
    #[serde(default)]
    pub verified: bool,
    pub classification: Classification,
}
