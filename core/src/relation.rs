//! "Not worse than" relation matrices built from cluster-rankings.

use concord_types::ClusterRanking;

use crate::matrix::BoolMatrix;
use crate::universe::ItemUniverse;

/// Build `Y` with `Y[i][j]` set iff item `i` sits in the same cluster as
/// item `j` or in an earlier one.
///
/// Items the ranking never mentions take the virtual position just past its
/// last cluster, so they tie with each other and lose to everything ranked.
/// The result is reflexive and total.
#[must_use]
pub fn not_worse_than(universe: &ItemUniverse, ranking: &ClusterRanking) -> BoolMatrix {
    let ranked = ranking.positions();
    let unranked = ranking.unranked_position();
    let position: Vec<usize> = universe
        .items()
        .iter()
        .map(|item| ranked.get(item).copied().unwrap_or(unranked))
        .collect();

    BoolMatrix::from_fn(universe.len(), |i, j| position[i] <= position[j])
}
