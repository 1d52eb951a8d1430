// tests/metrics_edges.rs
//
// Degenerate-input behavior of the metrics package: every edge resolves to a
// documented fallback value, never an error or NaN.

use social_interest_analyzer::{
    AnalysisEngine, Account, Category, Classification, ClassificationSignal,
};

fn account(primary: Category, ig: f64, bio: f64, verified: bool) -> Account {
    Account {
        username: "edge".to_string(),
        bio: String::new(),
        category_hint: None,
        verified,
        classification: Classification::new(
            primary,
            None,
            ClassificationSignal::new(ig, bio),
            0.5,
        ),
    }
}

#[test]
fn empty_batch_yields_all_fallback_metrics() {
    let result = AnalysisEngine::default().analyze(&[]);
    assert!(result.interest_vector.is_empty());

    let m = result.metrics;
    assert_eq!(m.diversity_index, 0.0);
    assert_eq!(m.knowledge_entertainment_ratio, 0.0);
    assert_eq!(m.celebrity_ratio, 0.0);
    assert_eq!(m.skewness, 0.0);
}

#[test]
fn zero_signal_batch_never_divides_by_zero() {
    // All strengths are zero: the accumulator keeps its zero entries and the
    // metrics fall through their degenerate branches.
    let accounts = vec![
        account(Category::Science, 0.0, 0.0, false),
        account(Category::Gaming, 0.0, 0.0, true),
    ];
    let result = AnalysisEngine::default().analyze(&accounts);

    assert_eq!(result.interest_vector.total(), 0.0);
    assert_eq!(result.interest_vector.len(), 2);

    let m = result.metrics;
    assert_eq!(m.diversity_index, 0.0);
    // Both sums zero → 0.0, not infinity.
    assert_eq!(m.knowledge_entertainment_ratio, 0.0);
    // Celebrity ratio reads raw accounts, not the (weightless) vector.
    assert!((m.celebrity_ratio - 0.5).abs() < 1e-9);
    assert_eq!(m.skewness, 0.0);
    assert!(!m.skewness.is_nan());
}

#[test]
fn knowledge_only_batch_has_infinite_ratio() {
    let accounts = vec![
        account(Category::Programming, 0.9, 0.9, false),
        account(Category::Science, 0.7, 0.2, false),
    ];
    let m = AnalysisEngine::default().analyze(&accounts).metrics;
    assert!(m.knowledge_entertainment_ratio.is_infinite());
    assert!(m.knowledge_entertainment_ratio > 0.0);
}

#[test]
fn neither_subset_present_ratio_is_zero() {
    let accounts = vec![account(Category::Travel, 1.0, 1.0, false)];
    let m = AnalysisEngine::default().analyze(&accounts).metrics;
    assert_eq!(m.knowledge_entertainment_ratio, 0.0);
}

#[test]
fn single_category_has_zero_entropy() {
    let accounts = vec![
        account(Category::Music, 1.0, 1.0, false),
        account(Category::Music, 0.5, 0.5, false),
    ];
    let m = AnalysisEngine::default().analyze(&accounts).metrics;
    assert_eq!(m.diversity_index, 0.0);
}

#[test]
fn verified_counts_follow_raw_accounts() {
    let accounts = vec![
        account(Category::News, 1.0, 1.0, true),
        account(Category::News, 1.0, 1.0, true),
        account(Category::News, 1.0, 1.0, false),
        account(Category::News, 1.0, 1.0, false),
    ];
    let m = AnalysisEngine::default().analyze(&accounts).metrics;
    assert!((m.celebrity_ratio - 0.50).abs() < 1e-9);
}

#[test]
fn skewness_requires_three_categories() {
    let two = vec![
        account(Category::Art, 1.0, 1.0, false),
        account(Category::Food, 0.5, 0.5, false),
    ];
    let m = AnalysisEngine::default().analyze(&two).metrics;
    assert_eq!(m.skewness, 0.0);

    let three = vec![
        account(Category::Art, 1.0, 1.0, false),
        account(Category::Food, 0.5, 0.5, false),
        account(Category::Travel, 0.1, 0.1, false),
    ];
    let m = AnalysisEngine::default().analyze(&three).metrics;
    // A lopsided three-way split has real skew.
    assert!(m.skewness != 0.0);
    assert!(!m.skewness.is_nan());
}
