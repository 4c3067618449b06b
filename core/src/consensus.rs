//! Consensus classes and their order.
//!
//! ```text
//! YA, YB -> C (agreement) -> C + forced contradictory pairs
//!        -> E = C (x) C^T -> E* (closure) -> classes -> precedence DAG -> order
//! ```

use std::collections::{BTreeSet, VecDeque};

use concord_types::{ClusterOrdering, CompositionMode};

use crate::components::connected_components;
use crate::matrix::BoolMatrix;

/// Ordered consensus classes as sorted item indices, best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consensus {
    pub classes: Vec<Vec<usize>>,
    pub ordering: ClusterOrdering,
}

/// Relative order of two classes according to the agreement matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    Before,
    After,
    /// No strict evidence, or evidence in both directions.
    Incomparable,
}

/// Agreement matrix `C` with every contradictory pair forced to equivalence.
#[must_use]
pub fn agreement(
    ya: &BoolMatrix,
    yb: &BoolMatrix,
    contradictory: &BTreeSet<(usize, usize)>,
    mode: CompositionMode,
) -> BoolMatrix {
    let agreed = match mode {
        CompositionMode::Pointwise => ya.intersection(yb),
        CompositionMode::Relational => ya.product(yb),
    };
    agreed.with_symmetric_pairs(contradictory)
}

/// Transitive closure of `C (x) C^T`.
#[must_use]
pub fn equivalence_closure(c: &BoolMatrix, mode: CompositionMode) -> BoolMatrix {
    let c_t = c.transpose();
    let seed = match mode {
        CompositionMode::Pointwise => c.intersection(&c_t),
        CompositionMode::Relational => c.product(&c_t),
    };
    seed.transitive_closure()
}

/// Equivalence classes of `E*`: `i ~ j` iff `E*[i][j]` and `E*[j][i]`.
///
/// Classes are returned in discovery order, i.e. by smallest index.
#[must_use]
pub fn classes(e_star: &BoolMatrix) -> Vec<Vec<usize>> {
    let all: Vec<usize> = (0..e_star.dim()).collect();
    connected_components(&all, |i, j| e_star.get(i, j) && e_star.get(j, i))
}

/// Compare two classes: strict agreement `C[i][j] & !C[j][i]` for some
/// `i in a`, `j in b` puts `a` first, unless some pair says the opposite.
#[must_use]
pub fn precedence(a: &[usize], b: &[usize], c: &BoolMatrix) -> Precedence {
    let mut a_first = false;
    let mut b_first = false;
    for &i in a {
        for &j in b {
            a_first |= c.get(i, j) && !c.get(j, i);
            b_first |= c.get(j, i) && !c.get(i, j);
            if a_first && b_first {
                return Precedence::Incomparable;
            }
        }
    }
    match (a_first, b_first) {
        (true, false) => Precedence::Before,
        (false, true) => Precedence::After,
        _ => Precedence::Incomparable,
    }
}

/// Order classes with Kahn's algorithm over the precedence graph.
///
/// Ready classes leave the queue in ascending discovery index. If the
/// graph has a cycle the classes keep their discovery order and the
/// result says so.
#[must_use]
pub fn order_classes(classes: Vec<Vec<usize>>, c: &BoolMatrix) -> Consensus {
    let m = classes.len();
    let mut successors: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); m];
    for a in 0..m {
        for b in (a + 1)..m {
            match precedence(&classes[a], &classes[b], c) {
                Precedence::Before => {
                    successors[a].insert(b);
                }
                Precedence::After => {
                    successors[b].insert(a);
                }
                Precedence::Incomparable => {}
            }
        }
    }

    let (order, ordering) = topological_order(&successors);
    let classes = match ordering {
        ClusterOrdering::Topological => {
            let mut slots: Vec<Option<Vec<usize>>> = classes.into_iter().map(Some).collect();
            order.iter().filter_map(|&k| slots[k].take()).collect()
        }
        ClusterOrdering::DiscoveryFallback { ordered, total } => {
            tracing::warn!(
                ordered,
                total,
                "consensus classes form a precedence cycle; keeping discovery order"
            );
            classes
        }
    };

    Consensus { classes, ordering }
}

/// Kahn's algorithm with a FIFO queue seeded in ascending node order.
fn topological_order(successors: &[BTreeSet<usize>]) -> (Vec<usize>, ClusterOrdering) {
    let total = successors.len();
    let mut indegree = vec![0usize; total];
    for next in successors.iter().flatten() {
        indegree[*next] += 1;
    }

    let mut queue: VecDeque<usize> = (0..total).filter(|&v| indegree[v] == 0).collect();
    let mut order = Vec::with_capacity(total);
    while let Some(v) = queue.pop_front() {
        order.push(v);
        for &u in &successors[v] {
            indegree[u] -= 1;
            if indegree[u] == 0 {
                queue.push_back(u);
            }
        }
    }

    if order.len() == total {
        (order, ClusterOrdering::Topological)
    } else {
        let ordered = order.len();
        (order, ClusterOrdering::DiscoveryFallback { ordered, total })
    }
}

/// Run the consensus stage end to end.
#[must_use]
pub fn build(
    ya: &BoolMatrix,
    yb: &BoolMatrix,
    contradictory: &BTreeSet<(usize, usize)>,
    mode: CompositionMode,
) -> Consensus {
    let c = agreement(ya, yb, contradictory, mode);
    let e_star = equivalence_closure(&c, mode);
    let found = classes(&e_star);
    tracing::debug!(classes = found.len(), "consensus classes extracted");
    order_classes(found, &c)
}
