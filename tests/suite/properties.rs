//! Algebraic properties over a fixed set of ranking pairs

use std::collections::HashSet;

use concord_core::{consensus, contradiction};
use concord_types::{CompositionMode, Item};
use serde_json::Value;

use crate::common::{RANKING_PAIRS, reconcile, relations};

#[test]
fn relations_are_total_preorders() {
    for (a, b) in RANKING_PAIRS {
        let (_, ya, yb) = relations(a, b);
        for y in [&ya, &yb] {
            assert!(y.is_reflexive(), "{a} / {b}");
            assert!(y.is_total(), "{a} / {b}");
            assert!(y.is_transitive(), "{a} / {b}");
        }
    }
}

#[test]
fn equivalence_closure_is_an_equivalence() {
    for (a, b) in RANKING_PAIRS {
        let (_, ya, yb) = relations(a, b);
        let found = contradiction::find(&ya, &yb, CompositionMode::Pointwise);
        let c = consensus::agreement(&ya, &yb, &found.pairs, CompositionMode::Pointwise);
        let e_star = consensus::equivalence_closure(&c, CompositionMode::Pointwise);

        assert!(e_star.is_reflexive(), "{a} / {b}");
        assert!(e_star.is_symmetric(), "{a} / {b}");
        assert!(e_star.is_transitive(), "{a} / {b}");
        assert_eq!(e_star.transitive_closure(), e_star, "{a} / {b}");
    }
}

#[test]
fn consensus_partitions_the_universe() {
    for (a, b) in RANKING_PAIRS {
        let (universe, _, _) = relations(a, b);
        let result = reconcile(a, b);

        let mut seen = HashSet::new();
        for item in result.consensus.items() {
            assert!(seen.insert(item.clone()), "{item} repeated for {a} / {b}");
        }
        let expected: HashSet<Item> = universe.items().iter().cloned().collect();
        assert_eq!(seen, expected, "{a} / {b}");
    }
}

#[test]
fn contradictory_items_share_a_consensus_cluster() {
    for (a, b) in RANKING_PAIRS {
        let result = reconcile(a, b);
        for group in result.contradiction_core.groups() {
            let home = result
                .consensus
                .entries()
                .iter()
                .find(|entry| entry.items().contains(&group[0]))
                .expect("every item lands in a cluster");
            for item in group {
                assert!(home.items().contains(item), "{item} split off for {a} / {b}");
            }
        }
    }
}

#[test]
fn core_groups_are_disjoint_and_sorted() {
    for (a, b) in RANKING_PAIRS {
        let result = reconcile(a, b);
        let mut seen = HashSet::new();
        for group in result.contradiction_core.groups() {
            assert!(group.len() >= 2, "{a} / {b}");
            assert!(group.is_sorted(), "{a} / {b}");
            for item in group {
                assert!(seen.insert(item.clone()), "{a} / {b}");
            }
        }
    }
}

#[test]
fn reconciling_a_ranking_with_itself_is_the_identity() {
    for (a, _) in RANKING_PAIRS {
        let result = reconcile(a, a);
        assert!(result.contradiction_core.is_empty(), "{a}");
        let expected: Value = serde_json::from_str(a).expect("fixture is JSON");
        let consensus = serde_json::to_value(&result.consensus).expect("consensus serializes");
        assert_eq!(consensus, normalize(expected), "{a}");
    }
}

#[test]
fn swapping_the_rankings_keeps_the_core() {
    for (a, b) in RANKING_PAIRS {
        let forward = reconcile(a, b);
        let backward = reconcile(b, a);
        assert_eq!(forward.contradiction_core, backward.contradiction_core, "{a} / {b}");
    }
}

/// Sort the members of each tied cluster into canonical item order.
fn normalize(ranking: Value) -> Value {
    let Value::Array(clusters) = ranking else {
        return ranking;
    };
    clusters
        .into_iter()
        .map(|cluster| match cluster {
            Value::Array(members) => {
                let mut items: Vec<Item> = members
                    .into_iter()
                    .map(|m| serde_json::from_value(m).expect("fixture item"))
                    .collect();
                items.sort();
                serde_json::to_value(items).expect("items serialize")
            }
            other => other,
        })
        .collect()
}
