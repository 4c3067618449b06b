//! Pairwise contradictions between two rankings.

use std::collections::BTreeSet;

use concord_types::CompositionMode;

use crate::components::connected_components;
use crate::matrix::BoolMatrix;

/// Contradictions found between two relation matrices.
#[derive(Debug, Clone)]
pub struct Contradictions {
    /// The witness matrix; an off-diagonal zero marks a contradiction.
    pub witness: BoolMatrix,
    /// Unordered contradictory pairs as `(low, high)` indices.
    pub pairs: BTreeSet<(usize, usize)>,
    /// Connected groups of contradictory items, sorted, ordered by their
    /// smallest index.
    pub components: Vec<Vec<usize>>,
}

/// Witness matrix `P` for two "not worse than" relations.
///
/// Pointwise: `P = (YA & YB) | (YA^T & YB^T)`, set where both rankings
/// agree on a direction. Relational: `P = YA.YB^T | YA^T.YB` with Boolean
/// products.
#[must_use]
pub fn witness(ya: &BoolMatrix, yb: &BoolMatrix, mode: CompositionMode) -> BoolMatrix {
    let (ya_t, yb_t) = (ya.transpose(), yb.transpose());
    match mode {
        CompositionMode::Pointwise => ya.intersection(yb).union(&ya_t.intersection(&yb_t)),
        CompositionMode::Relational => ya.product(&yb_t).union(&ya_t.product(yb)),
    }
}

/// Find contradictory pairs and group them into connected components.
#[must_use]
pub fn find(ya: &BoolMatrix, yb: &BoolMatrix, mode: CompositionMode) -> Contradictions {
    let witness = witness(ya, yb, mode);
    let n = witness.dim();

    let mut pairs = BTreeSet::new();
    for i in 0..n {
        for j in (0..n).filter(|&j| j != i) {
            if !witness.get(i, j) {
                pairs.insert((i.min(j), i.max(j)));
            }
        }
    }

    let involved: Vec<usize> = pairs
        .iter()
        .flat_map(|&(a, b)| [a, b])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let components = connected_components(&involved, |a, b| pairs.contains(&(a.min(b), a.max(b))));

    tracing::debug!(
        items = n,
        pairs = pairs.len(),
        components = components.len(),
        "contradiction core extracted"
    );

    Contradictions {
        witness,
        pairs,
        components,
    }
}
