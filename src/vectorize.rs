//! # Interest Aggregation
//! Folds a batch of classified accounts into a normalized percentage
//! distribution across the category taxonomy.
//!
//! Per account: fused strength lands on the primary category at full weight
//! and on the secondary (when present) at the secondary weight. After the
//! fold the accumulator is normalized so the values sum to 100. A batch with
//! zero total weight is returned as-is (all-zero or empty) instead of
//! dividing by zero.
//!
//! The fold is order-independent up to floating-point summation order, so a
//! caller may parallelize the per-account map and keep a single-threaded
//! reduction without changing observable results beyond epsilon.

use std::collections::{btree_map, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::fusion::fuse_signals;
use crate::taxonomy::Category;
use crate::weights::AnalyzerWeights;

/// Normalized interest distribution: category → percentage.
///
/// Invariants: every key is a taxonomy member (guaranteed by the type),
/// values are non-negative, and they sum to 100.0 ± epsilon whenever the
/// source batch contributed any weight. Categories that never received
/// weight have no entry; a category touched with zero strength keeps an
/// explicit 0.0 entry, mirroring how the accumulator is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestVector(BTreeMap<Category, f64>);

impl InterestVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage for a category; absent keys read as zero.
    pub fn get(&self, category: Category) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.0.iter().map(|(&c, &v)| (c, v))
    }

    /// Values only, in deterministic (key) order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }

    /// Sum of all stored percentages (or raw weights before normalization).
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// The `n` heaviest categories, descending by percentage. Ties break on
    /// the deterministic key order, so repeated runs agree.
    pub fn top_n(&self, n: usize) -> Vec<(Category, f64)> {
        let mut entries: Vec<(Category, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries.truncate(n);
        entries
    }
}

impl FromIterator<(Category, f64)> for InterestVector {
    fn from_iter<I: IntoIterator<Item = (Category, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for InterestVector {
    type Item = (Category, f64);
    type IntoIter = btree_map::IntoIter<Category, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Fold all accounts into a normalized interest vector.
///
/// Accumulator keys are created on first touch (even when the added strength
/// is zero); normalization to percentages only happens when the total is
/// positive. Deterministic for a given input sequence.
pub fn build_interest_vector(accounts: &[Account], weights: &AnalyzerWeights) -> InterestVector {
    let mut acc: BTreeMap<Category, f64> = BTreeMap::new();

    for account in accounts {
        let classification = &account.classification;
        let strength = fuse_signals(&classification.signals, weights);

        *acc.entry(classification.primary_category).or_insert(0.0) +=
            strength * weights.w_primary;

        if let Some(secondary) = classification.secondary_category {
            *acc.entry(secondary).or_insert(0.0) += strength * weights.w_secondary;
        }
    }

    let total: f64 = acc.values().sum();
    if total > 0.0 {
        for v in acc.values_mut() {
            *v = (*v / total) * 100.0;
        }
    }

    InterestVector(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{Classification, ClassificationSignal};

    fn mk_account(
        username: &str,
        primary: Category,
        secondary: Option<Category>,
        signals: ClassificationSignal,
    ) -> Account {
        Account {
            username: username.to_string(),
            bio: String::new(),
            category_hint: None,
            verified: false,
            classification: Classification::new(primary, secondary, signals, 0.9),
        }
    }

    #[test]
    fn empty_batch_yields_empty_vector() {
        let v = build_interest_vector(&[], &AnalyzerWeights::default());
        assert!(v.is_empty());
        assert_eq!(v.total(), 0.0);
    }

    #[test]
    fn single_account_normalizes_to_hundred() {
        let accounts = vec![mk_account(
            "a",
            Category::Science,
            None,
            ClassificationSignal::new(0.5, 0.5),
        )];
        let v = build_interest_vector(&accounts, &AnalyzerWeights::default());
        assert_eq!(v.len(), 1);
        assert!((v.get(Category::Science) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn secondary_category_gets_secondary_weight() {
        // strength1 = 0.8*0.6 + 0.2*0.4 = 0.56 → Technology 0.56
        // strength2 = 0.0*0.6 + 1.0*0.4 = 0.40 → Gaming 0.40, Technology +0.16
        let accounts = vec![
            mk_account(
                "a1",
                Category::Technology,
                None,
                ClassificationSignal::new(0.8, 0.2),
            ),
            mk_account(
                "a2",
                Category::Gaming,
                Some(Category::Technology),
                ClassificationSignal::new(0.0, 1.0),
            ),
        ];
        let v = build_interest_vector(&accounts, &AnalyzerWeights::default());

        // Technology = 0.72/1.12, Gaming = 0.40/1.12
        assert!((v.get(Category::Technology) - 64.285714).abs() < 1e-4);
        assert!((v.get(Category::Gaming) - 35.714285).abs() < 1e-4);
        assert!((v.total() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn zero_strength_batch_stays_unnormalized() {
        let accounts = vec![mk_account(
            "a",
            Category::Other,
            None,
            ClassificationSignal::zero(),
        )];
        let v = build_interest_vector(&accounts, &AnalyzerWeights::default());
        // Key exists (touched by the fold) but carries zero weight.
        assert_eq!(v.len(), 1);
        assert_eq!(v.get(Category::Other), 0.0);
        assert_eq!(v.total(), 0.0);
    }

    #[test]
    fn untouched_categories_have_no_entry() {
        let accounts = vec![mk_account(
            "a",
            Category::Music,
            None,
            ClassificationSignal::new(1.0, 1.0),
        )];
        let v = build_interest_vector(&accounts, &AnalyzerWeights::default());
        assert_eq!(v.len(), 1);
        assert_eq!(v.get(Category::Science), 0.0);
        assert!(!v.iter().any(|(c, _)| c == Category::Science));
    }

    #[test]
    fn order_of_accounts_does_not_matter() {
        let w = AnalyzerWeights::default();
        let a = mk_account(
            "a",
            Category::Art,
            Some(Category::Design),
            ClassificationSignal::new(0.3, 0.9),
        );
        let b = mk_account(
            "b",
            Category::Design,
            None,
            ClassificationSignal::new(0.7, 0.1),
        );
        let v1 = build_interest_vector(&[a.clone(), b.clone()], &w);
        let v2 = build_interest_vector(&[b, a], &w);
        for (c, pct) in v1.iter() {
            assert!((pct - v2.get(c)).abs() < 1e-9);
        }
    }

    #[test]
    fn top_n_sorts_descending() {
        let accounts = vec![
            mk_account("a", Category::Food, None, ClassificationSignal::new(1.0, 1.0)),
            mk_account("b", Category::Travel, None, ClassificationSignal::new(0.5, 0.5)),
            mk_account("c", Category::Fitness, None, ClassificationSignal::new(0.2, 0.2)),
        ];
        let v = build_interest_vector(&accounts, &AnalyzerWeights::default());
        let top = v.top_n(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, Category::Food);
        assert_eq!(top[1].0, Category::Travel);
        assert!(top[0].1 >= top[1].1);
    }
}
