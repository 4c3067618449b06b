//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use concord_core::{BoolMatrix, ItemUniverse, relation};
use concord_types::{ClusterRanking, Reconciliation};
use serde_json::Value;

/// Parse a ranking fixture from its JSON form.
pub fn ranking(json: &str) -> ClusterRanking {
    ClusterRanking::from_json_str(json).expect("test fixture must be a valid ranking")
}

/// Reconcile two JSON fixtures with default options.
pub fn reconcile(a: &str, b: &str) -> Reconciliation {
    concord_core::reconcile(&ranking(a), &ranking(b))
}

/// The contradiction core as JSON.
pub fn core_json(result: &Reconciliation) -> Value {
    serde_json::to_value(&result.contradiction_core).expect("core serializes")
}

/// The consensus ranking as JSON.
pub fn consensus_json(result: &Reconciliation) -> Value {
    serde_json::to_value(&result.consensus).expect("consensus serializes")
}

/// Relation matrices of two fixtures over their shared universe.
pub fn relations(a: &str, b: &str) -> (ItemUniverse, BoolMatrix, BoolMatrix) {
    let (a, b) = (ranking(a), ranking(b));
    let universe = ItemUniverse::from_rankings(&a, &b);
    let ya = relation::not_worse_than(&universe, &a);
    let yb = relation::not_worse_than(&universe, &b);
    (universe, ya, yb)
}

/// Ranking pairs used by the property checks.
pub const RANKING_PAIRS: &[(&str, &str)] = &[
    ("[1, [2, 3], 4]", "[1, [2, 3], 4]"),
    ("[1, 2]", "[2, 1]"),
    ("[1, [2, 3], 4]", "[1, [3, 2], 4]"),
    ("[1, 2, 3]", "[3, 2, 1]"),
    ("[1, 2, 3, 4, 5]", "[2, 1, 3, 5, 4]"),
    ("[[1, 2, 3], 4]", "[4, 3, 2, 1]"),
    (r#"["a", ["b", 10], 9]"#, r#"[9, "b", "a"]"#),
    ("[5, [1, 4], 2, 3]", "[[2, 3], 5, 1, 4]"),
    ("[7, 1, 3]", "[3, 8, 1]"),
    ("[]", "[1, 2]"),
];
