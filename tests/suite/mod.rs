//! Integration test modules

mod properties;
mod report;
mod scenarios;
