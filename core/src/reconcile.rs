//! Two-stage reconciliation: contradiction core, then consensus ranking.

use concord_types::{
    ClusterRanking, ConsensusEntry, ConsensusRanking, ContradictionCore, ReconcileOptions,
    Reconciliation,
};

use crate::consensus;
use crate::contradiction;
use crate::relation::not_worse_than;
use crate::universe::ItemUniverse;

/// Reconcile two rankings with default options.
#[must_use]
pub fn reconcile(a: &ClusterRanking, b: &ClusterRanking) -> Reconciliation {
    reconcile_with(a, b, &ReconcileOptions::default())
}

/// Reconcile two rankings.
///
/// Pure and deterministic: every call owns its matrices, so concurrent
/// calls never share state. Two empty rankings give an empty result.
#[must_use]
pub fn reconcile_with(
    a: &ClusterRanking,
    b: &ClusterRanking,
    options: &ReconcileOptions,
) -> Reconciliation {
    let universe = ItemUniverse::from_rankings(a, b);
    if universe.is_empty() {
        tracing::debug!("both rankings are empty");
        return Reconciliation::empty();
    }

    let mode = options.composition;
    let ya = not_worse_than(&universe, a);
    let yb = not_worse_than(&universe, b);
    tracing::debug!(items = universe.len(), %mode, "relation matrices built");

    let contradictions = contradiction::find(&ya, &yb, mode);
    let contradiction_core = ContradictionCore::new(
        contradictions
            .components
            .iter()
            .map(|component| universe.resolve(component))
            .collect(),
    );

    let consensus = consensus::build(&ya, &yb, &contradictions.pairs, mode);
    let ranking = ConsensusRanking::new(
        consensus
            .classes
            .iter()
            .map(|class| ConsensusEntry::from_class(universe.resolve(class)))
            .collect(),
    );

    Reconciliation {
        contradiction_core,
        consensus: ranking,
        ordering: consensus.ordering,
    }
}
