//! Concord CLI library: argument parsing, ranking input and result output.
//!
//! The binary entry point is in main.rs. These modules are exposed so the
//! integration suite can drive the same boundary the binary uses.

pub mod args;
pub mod input;
pub mod report;
