//! Cluster-rankings: ordered indifference clusters over items.
//!
//! Pure domain types with no IO. Invariants are enforced at construction
//! time: a [`ClusterRanking`] never holds an empty cluster, and the JSON
//! boundary rejects anything that is not a flat list of scalars and
//! scalar groups.

use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::Item;

// ── Errors ───────────────────────────────────────────────────

/// A ranking that cannot be represented as a cluster-ranking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("ranking must be a sequence of items or item groups, found {found}")]
    NotASequence { found: &'static str },
    #[error("cluster {index} is empty")]
    EmptyCluster { index: usize },
    #[error("cluster {index} contains a nested group")]
    NestedCluster { index: usize },
    #[error("cluster {cluster} contains {found}; items must be integers or strings")]
    InvalidItem { cluster: usize, found: &'static str },
    #[error("invalid ranking JSON: {0}")]
    Syntax(String),
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Cluster ──────────────────────────────────────────────────

/// A non-empty group of mutually indifferent items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster(Vec<Item>);

impl Cluster {
    pub fn new(items: Vec<Item>, index: usize) -> Result<Self, RankingError> {
        if items.is_empty() {
            return Err(RankingError::EmptyCluster { index });
        }
        Ok(Self(items))
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; clusters are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Cluster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.as_slice() {
            [single] => single.serialize(serializer),
            items => items.serialize(serializer),
        }
    }
}

// ── ClusterRanking ───────────────────────────────────────────

/// An ordered sequence of indifference clusters; cluster 0 is best.
///
/// Construction validates that every cluster is non-empty. Nothing else is
/// checked: an item repeated across clusters takes the position of its last
/// occurrence (see [`ClusterRanking::positions`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct ClusterRanking {
    clusters: Vec<Cluster>,
}

impl Serialize for ClusterRanking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.clusters.serialize(serializer)
    }
}

impl ClusterRanking {
    /// Build a ranking from raw groups. Fails on the first empty group.
    pub fn new<I, G>(groups: I) -> Result<Self, RankingError>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator,
        G::Item: Into<Item>,
    {
        let clusters = groups
            .into_iter()
            .enumerate()
            .map(|(index, group)| Cluster::new(group.into_iter().map(Into::into).collect(), index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { clusters })
    }

    /// Parse the nested JSON form, e.g. `[1, [2, 3], 4]`.
    pub fn from_json_str(text: &str) -> Result<Self, RankingError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| RankingError::Syntax(e.to_string()))?;
        Self::try_from(value)
    }

    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Every item reference in cluster order, duplicates included.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.clusters.iter().flat_map(|c| c.items())
    }

    /// Cluster index of every ranked item. A repeated item keeps the index
    /// of its last occurrence.
    #[must_use]
    pub fn positions(&self) -> HashMap<&Item, usize> {
        let mut positions = HashMap::new();
        for (index, cluster) in self.clusters.iter().enumerate() {
            for item in cluster.items() {
                positions.insert(item, index);
            }
        }
        positions
    }

    /// The virtual position given to items this ranking does not mention.
    #[must_use]
    pub fn unranked_position(&self) -> usize {
        self.clusters.len()
    }
}

fn scalar_item(value: Value, cluster: usize) -> Result<Item, RankingError> {
    match value {
        Value::String(text) => Ok(Item::Text(text)),
        Value::Number(number) => Ok(Item::from(number)),
        Value::Array(_) => Err(RankingError::NestedCluster { index: cluster }),
        other => Err(RankingError::InvalidItem {
            cluster,
            found: json_kind(&other),
        }),
    }
}

impl TryFrom<Value> for ClusterRanking {
    type Error = RankingError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Array(entries) = value else {
            return Err(RankingError::NotASequence {
                found: json_kind(&value),
            });
        };

        let clusters = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let items = match entry {
                    Value::Array(group) => group
                        .into_iter()
                        .map(|v| scalar_item(v, index))
                        .collect::<Result<Vec<_>, _>>()?,
                    scalar => vec![scalar_item(scalar, index)?],
                };
                Cluster::new(items, index)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { clusters })
    }
}
