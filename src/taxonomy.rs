//! # Category Taxonomy
//!
//! The closed set of 33 labels an account can be classified into. The
//! classifier upstream is prompted with exactly these names; everything the
//! engine aggregates is keyed by this enum, so an unknown label can only
//! exist outside the crate boundary (see `ingest`).
//!
//! `Other` is the catch-all and doubles as the fallback primary category when
//! an upstream classification fails.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Closed account-interest taxonomy. Order of variants is not meaningful;
/// `Ord` exists only so the enum can key a `BTreeMap` deterministically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Science,
    Technology,
    Business,
    Finance,
    Education,
    Programming,
    Engineering,
    Health,
    Fitness,
    Sports,
    Entertainment,
    Gaming,
    Movies,
    Music,
    Art,
    Design,
    Photography,
    Writing,
    Lifestyle,
    Travel,
    Food,
    Fashion,
    Motivation,
    #[serde(rename = "Self-Improvement")]
    SelfImprovement,
    Psychology,
    News,
    Politics,
    Culture,
    Celebrity,
    Influencer,
    Religion,
    Philosophy,
    Other,
}

/// Every taxonomy member, in declaration order. Useful for prompts,
/// exhaustiveness tests, and building lookup tables.
pub const ALL_CATEGORIES: [Category; 33] = [
    Category::Science,
    Category::Technology,
    Category::Business,
    Category::Finance,
    Category::Education,
    Category::Programming,
    Category::Engineering,
    Category::Health,
    Category::Fitness,
    Category::Sports,
    Category::Entertainment,
    Category::Gaming,
    Category::Movies,
    Category::Music,
    Category::Art,
    Category::Design,
    Category::Photography,
    Category::Writing,
    Category::Lifestyle,
    Category::Travel,
    Category::Food,
    Category::Fashion,
    Category::Motivation,
    Category::SelfImprovement,
    Category::Psychology,
    Category::News,
    Category::Politics,
    Category::Culture,
    Category::Celebrity,
    Category::Influencer,
    Category::Religion,
    Category::Philosophy,
    Category::Other,
];

/// "Knowledge" side of the knowledge/entertainment ratio.
pub const KNOWLEDGE_CATEGORIES: [Category; 5] = [
    Category::Science,
    Category::Technology,
    Category::Education,
    Category::Programming,
    Category::Engineering,
];

/// "Entertainment" side of the knowledge/entertainment ratio.
pub const ENTERTAINMENT_CATEGORIES: [Category; 6] = [
    Category::Entertainment,
    Category::Gaming,
    Category::Movies,
    Category::Music,
    Category::Celebrity,
    Category::Influencer,
];

static BY_NAME: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    ALL_CATEGORIES.iter().map(|&c| (c.as_str(), c)).collect()
});

impl Category {
    /// Canonical label as the upstream classifier emits it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Science => "Science",
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Finance => "Finance",
            Category::Education => "Education",
            Category::Programming => "Programming",
            Category::Engineering => "Engineering",
            Category::Health => "Health",
            Category::Fitness => "Fitness",
            Category::Sports => "Sports",
            Category::Entertainment => "Entertainment",
            Category::Gaming => "Gaming",
            Category::Movies => "Movies",
            Category::Music => "Music",
            Category::Art => "Art",
            Category::Design => "Design",
            Category::Photography => "Photography",
            Category::Writing => "Writing",
            Category::Lifestyle => "Lifestyle",
            Category::Travel => "Travel",
            Category::Food => "Food",
            Category::Fashion => "Fashion",
            Category::Motivation => "Motivation",
            Category::SelfImprovement => "Self-Improvement",
            Category::Psychology => "Psychology",
            Category::News => "News",
            Category::Politics => "Politics",
            Category::Culture => "Culture",
            Category::Celebrity => "Celebrity",
            Category::Influencer => "Influencer",
            Category::Religion => "Religion",
            Category::Philosophy => "Philosophy",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label outside the closed taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category label: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Exact-match parse against the canonical labels. Case and whitespace
    /// are the classifier's contract; we only trim the edges.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(s.trim())
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
