//! # Classifier Ingest Boundary
//! Where external classification results enter the system. The upstream
//! classifier emits JSON with free-form string labels; this module is the
//! single place those strings are parsed against the closed taxonomy, so the
//! engine itself only ever sees typed `Category` values.
//!
//! Two modes:
//! - `Lenient` (default): an unknown primary label is replaced by the fixed
//!   low-confidence fallback classification and logged; an unknown secondary
//!   is dropped. Matches how the original pipeline degraded.
//! - `Strict`: unknown labels and out-of-range signals or confidence reject
//!   the whole batch with a typed error naming the offender.
//!
//! The classifier model occasionally emits the literal string "null" for a
//! missing secondary category. That quirk is normalized to a real absence
//! here, at the boundary, so no "is it null-the-string" check ever reaches
//! the aggregation fold.

use serde::Deserialize;
use tracing::warn;

use crate::account::{Account, Classification, ClassificationSignal};
use crate::taxonomy::Category;

/// How to treat input that violates the classifier's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngestMode {
    /// Substitute fallbacks and keep going (original behavior).
    #[default]
    Lenient,
    /// Reject the batch on the first contract violation.
    Strict,
}

/// Contract violation found while ingesting a classified batch.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("batch is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("account {username:?}: unknown {field} category {label:?}")]
    UnknownCategory {
        username: String,
        field: &'static str,
        label: String,
    },
    #[error("account {username:?}: {field} = {value} outside [0, 1]")]
    OutOfRange {
        username: String,
        field: &'static str,
        value: f64,
    },
}

/// Wire shape of one classified account as the classifier emits it.
#[derive(Debug, Deserialize)]
struct RawAccount {
    username: String,
    #[serde(default)]
    bio: String,
    #[serde(default, alias = "category")]
    category_hint: Option<String>,
    #[serde(default)]
    verified: bool,
    classification: RawClassification,
}

#[derive(Debug, Deserialize)]
struct RawClassification {
    primary_category: String,
    #[serde(default)]
    secondary_category: Option<String>,
    #[serde(default = "zero_signals")]
    signals: ClassificationSignal,
    #[serde(default)]
    confidence: f64,
}

fn zero_signals() -> ClassificationSignal {
    ClassificationSignal::zero()
}

/// Parse a JSON array of classified accounts into the typed batch.
pub fn parse_accounts(json: &str, mode: IngestMode) -> Result<Vec<Account>, IngestError> {
    let raw: Vec<RawAccount> = serde_json::from_str(json)?;
    raw.into_iter().map(|r| convert(r, mode)).collect()
}

fn convert(raw: RawAccount, mode: IngestMode) -> Result<Account, IngestError> {
    let classification = convert_classification(&raw.username, raw.classification, mode)?;
    Ok(Account {
        username: raw.username,
        bio: raw.bio,
        category_hint: raw.category_hint,
        verified: raw.verified,
        classification,
    })
}

fn convert_classification(
    username: &str,
    raw: RawClassification,
    mode: IngestMode,
) -> Result<Classification, IngestError> {
    if mode == IngestMode::Strict {
        check_unit_range(username, "signals.from_instagram_category", raw.signals.from_instagram_category)?;
        check_unit_range(username, "signals.from_bio", raw.signals.from_bio)?;
        check_unit_range(username, "confidence", raw.confidence)?;
    }

    let primary = match raw.primary_category.parse::<Category>() {
        Ok(c) => c,
        Err(e) => match mode {
            IngestMode::Strict => {
                return Err(IngestError::UnknownCategory {
                    username: username.to_string(),
                    field: "primary",
                    label: e.0,
                })
            }
            IngestMode::Lenient => {
                warn!(%username, label = %e.0, "unknown primary category, using fallback classification");
                return Ok(Classification::fallback());
            }
        },
    };

    let secondary = match raw.secondary_category.as_deref() {
        // Some classifier outputs carry the literal "null" instead of an
        // absent field; both mean "no secondary interest".
        None | Some("null") => None,
        Some(label) => match label.parse::<Category>() {
            Ok(c) => Some(c),
            Err(e) => match mode {
                IngestMode::Strict => {
                    return Err(IngestError::UnknownCategory {
                        username: username.to_string(),
                        field: "secondary",
                        label: e.0,
                    })
                }
                IngestMode::Lenient => {
                    warn!(%username, label = %e.0, "unknown secondary category, dropping");
                    None
                }
            },
        },
    };

    Ok(Classification::new(
        primary,
        secondary,
        raw.signals,
        raw.confidence,
    ))
}

fn check_unit_range(username: &str, field: &'static str, value: f64) -> Result<(), IngestError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(IngestError::OutOfRange {
            username: username.to_string(),
            field,
            value,
        });
    }
    Ok(())
}
