//! Rank reconciliation for Concord.
//!
//! Two cluster-rankings over a shared item universe are turned into
//! "not worse than" relation matrices, compared for strict contradictions,
//! and merged into one consensus cluster-ranking:
//!
//! ```text
//! rankings -> ItemUniverse -> YA, YB -> contradictions -> C -> E* -> classes -> order
//! ```
//!
//! Everything here is pure computation over owned matrices; parsing and
//! presentation live in `concord-types` and the `concord` binary.

pub mod components;
pub mod consensus;
pub mod contradiction;
pub mod matrix;
pub mod reconcile;
pub mod relation;
pub mod universe;

pub use consensus::{Consensus, Precedence};
pub use contradiction::Contradictions;
pub use matrix::BoolMatrix;
pub use reconcile::{reconcile, reconcile_with};
pub use universe::ItemUniverse;
