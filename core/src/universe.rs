//! The shared, canonically indexed set of items.

use std::collections::{BTreeSet, HashMap};

use concord_types::{ClusterRanking, Item};

/// Deduplicated union of the items of two rankings.
///
/// Index `i` is the position of the item in the canonical item order
/// (integer readings first, numerically; then text, lexicographically). The index
/// fixes matrix rows and output tie-breaks, never semantic rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUniverse {
    items: Vec<Item>,
    index: HashMap<Item, usize>,
}

impl ItemUniverse {
    #[must_use]
    pub fn from_rankings(a: &ClusterRanking, b: &ClusterRanking) -> Self {
        let items: Vec<Item> = a
            .items()
            .chain(b.items())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.clone(), i))
            .collect();
        Self { items, index }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn index_of(&self, item: &Item) -> Option<usize> {
        self.index.get(item).copied()
    }

    #[must_use]
    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }

    /// Items at the given indices, in index order.
    #[must_use]
    pub fn resolve(&self, indices: &[usize]) -> Vec<Item> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.into_iter().map(|i| self.item(i).clone()).collect()
    }
}
