//! Resolved reconciliation settings shared across crates.
//!
//! Raw TOML deserialization structs (with `Option` fields) stay private in
//! `concord-config`. The config loader resolves them into these types at
//! the parse boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown composition mode `{0}` (expected `pointwise` or `relational`)")]
pub struct CompositionParseError(String);

/// How two relation matrices are combined by the reconciliation stages.
///
/// `Pointwise` intersects relations element by element, so a pair is
/// contradictory exactly when the two rankings strictly oppose each other.
/// `Relational` composes them with the Boolean matrix product; for total
/// relation matrices that product is saturated, which merges every item
/// into one class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionMode {
    #[default]
    Pointwise,
    Relational,
}

impl CompositionMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pointwise => "pointwise",
            Self::Relational => "relational",
        }
    }
}

impl fmt::Display for CompositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompositionMode {
    type Err = CompositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pointwise" => Ok(Self::Pointwise),
            "relational" => Ok(Self::Relational),
            _ => Err(CompositionParseError(s.to_owned())),
        }
    }
}

/// Options for a single reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    pub composition: CompositionMode,
}

impl ReconcileOptions {
    #[must_use]
    pub fn with_composition(mut self, composition: CompositionMode) -> Self {
        self.composition = composition;
        self
    }
}
