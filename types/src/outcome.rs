//! Results of reconciling two cluster-rankings.

use std::slice;

use serde::Serialize;

use crate::Item;

/// Connected groups of items the two rankings strictly disagree on.
///
/// Items inside a group follow the canonical item order; groups are ordered
/// by their first item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContradictionCore(Vec<Vec<Item>>);

impl ContradictionCore {
    #[must_use]
    pub fn new(groups: Vec<Vec<Item>>) -> Self {
        Self(groups)
    }

    #[must_use]
    pub fn groups(&self) -> &[Vec<Item>] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn contains(&self, item: &Item) -> bool {
        self.0.iter().any(|group| group.contains(item))
    }
}

/// One position of the consensus ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConsensusEntry {
    Single(Item),
    /// Two or more indifferent items in canonical order.
    Tied(Vec<Item>),
}

impl ConsensusEntry {
    /// Render a class: a lone item stays bare, anything larger is a tie.
    #[must_use]
    pub fn from_class(mut items: Vec<Item>) -> Self {
        if items.len() == 1 {
            Self::Single(items.remove(0))
        } else {
            Self::Tied(items)
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        match self {
            Self::Single(item) => slice::from_ref(item),
            Self::Tied(items) => items,
        }
    }
}

/// Merged ranking, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConsensusRanking(Vec<ConsensusEntry>);

impl ConsensusRanking {
    #[must_use]
    pub fn new(entries: Vec<ConsensusEntry>) -> Self {
        Self(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[ConsensusEntry] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every item, in consensus order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.0.iter().flat_map(ConsensusEntry::items)
    }
}

/// How the consensus classes were put in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClusterOrdering {
    /// Every class was placed by the precedence graph.
    Topological,
    /// The precedence graph had a cycle; classes kept their discovery order.
    /// `ordered` classes were placed before the sort stalled.
    DiscoveryFallback { ordered: usize, total: usize },
}

impl ClusterOrdering {
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::DiscoveryFallback { .. })
    }
}

/// The two-stage result of a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub contradiction_core: ContradictionCore,
    pub consensus: ConsensusRanking,
    pub ordering: ClusterOrdering,
}

impl Reconciliation {
    /// Result for two rankings that mention no items at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            contradiction_core: ContradictionCore::default(),
            consensus: ConsensusRanking::default(),
            ordering: ClusterOrdering::Topological,
        }
    }
}
