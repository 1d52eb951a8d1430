// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod account;
pub mod engine;
pub mod fusion;
pub mod ingest;
pub mod report;
pub mod stats;
pub mod taxonomy;
pub mod vectorize;
pub mod weights;

// ---- Re-exports for stable public API ----
pub use crate::account::{Account, Classification, ClassificationSignal};
pub use crate::engine::{AnalysisEngine, AnalysisResult};
pub use crate::ingest::{parse_accounts, IngestError, IngestMode};
pub use crate::report::NarratorInput;
pub use crate::stats::Metrics;
pub use crate::taxonomy::Category;
pub use crate::vectorize::InterestVector;
pub use crate::weights::AnalyzerWeights;
