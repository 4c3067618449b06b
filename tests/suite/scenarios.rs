//! End-to-end reconciliation scenarios

use concord_types::{ClusterOrdering, CompositionMode, Item, ReconcileOptions};
use serde_json::json;

use crate::common::{consensus_json, core_json, ranking, reconcile};

#[test]
fn identical_rankings_have_no_contradictions() {
    let result = reconcile("[1, [2, 3], 4]", "[1, [2, 3], 4]");
    assert!(result.contradiction_core.is_empty());
    assert_eq!(consensus_json(&result), json!([1, [2, 3], 4]));
    assert_eq!(result.ordering, ClusterOrdering::Topological);
}

#[test]
fn full_reversal_of_two_items_merges_them() {
    let result = reconcile("[1, 2]", "[2, 1]");
    assert_eq!(core_json(&result), json!([[1, 2]]));
    assert_eq!(consensus_json(&result), json!([[1, 2]]));
}

#[test]
fn internal_tie_order_is_irrelevant() {
    let result = reconcile("[1, [2, 3], 4]", "[1, [3, 2], 4]");
    assert!(result.contradiction_core.is_empty());
    assert_eq!(consensus_json(&result), json!([1, [2, 3], 4]));
}

#[test]
fn full_reversal_of_three_items_merges_everything() {
    let result = reconcile("[1, 2, 3]", "[3, 2, 1]");
    assert_eq!(core_json(&result), json!([[1, 2, 3]]));
    assert_eq!(consensus_json(&result), json!([[1, 2, 3]]));
}

#[test]
fn separate_disagreements_stay_separate() {
    let result = reconcile("[1, 2, 3, 4, 5]", "[2, 1, 3, 5, 4]");
    assert_eq!(core_json(&result), json!([[1, 2], [4, 5]]));
    assert_eq!(consensus_json(&result), json!([[1, 2], 3, [4, 5]]));
}

#[test]
fn tie_against_strict_order_is_not_a_contradiction() {
    let result = reconcile("[[1, 2], 3]", "[1, 2, 3]");
    assert!(result.contradiction_core.is_empty());
    assert_eq!(consensus_json(&result), json!([1, 2, 3]));
}

#[test]
fn items_missing_from_one_ranking_rank_last_there() {
    let result = reconcile("[1, 2]", "[3, 1]");
    assert!(result.contradiction_core.contains(&Item::from(3)));
    assert_eq!(result.consensus.len(), 1);
    assert_eq!(result.consensus.items().count(), 3);
}

#[test]
fn both_rankings_empty() {
    let result = reconcile("[]", "[]");
    assert!(result.contradiction_core.is_empty());
    assert!(result.consensus.is_empty());
}

#[test]
fn text_and_numeric_items_use_canonical_order() {
    let result = reconcile(r#"["b", "a", 10, 9]"#, r#"["a", "b", 9, 10]"#);
    assert_eq!(core_json(&result), json!([[9, 10], ["a", "b"]]));
    assert_eq!(consensus_json(&result), json!([["a", "b"], [9, 10]]));
}

#[test]
fn relational_mode_collapses_total_orders() {
    let options = ReconcileOptions::default().with_composition(CompositionMode::Relational);
    let result = concord_core::reconcile_with(
        &ranking("[1, 2, 3]"),
        &ranking("[1, 2, 3]"),
        &options,
    );
    assert!(result.contradiction_core.is_empty());
    assert_eq!(consensus_json(&result), json!([[1, 2, 3]]));
}
