//! Core domain types for Concord.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies:
//! ranked items, validated cluster-rankings, reconciliation results and the
//! resolved settings that steer a reconciliation.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod item;
mod outcome;
mod ranking;
mod settings;

pub use item::Item;
pub use outcome::{
    ClusterOrdering, ConsensusEntry, ConsensusRanking, ContradictionCore, Reconciliation,
};
pub use ranking::{Cluster, ClusterRanking, RankingError};
pub use settings::{CompositionMode, CompositionParseError, ReconcileOptions};
