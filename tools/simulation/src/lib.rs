//! Scalability & Text-Format Harness
//!
//! Glue around the matching cores: deterministic random instance generation,
//! timing sweeps over growing problem sizes, metrics aggregation with JSON
//! export, and the line-oriented text file format used by the `matcher` and
//! `verifier` binaries.
//!
//! # Modules
//! - `generator` — Seeded random instance generation
//! - `runner` — Scalability sweep: time engine runs across a size schedule
//! - `metrics` — Per-size latency and proposal-count aggregates
//! - `export` — Sweep results as JSON
//! - `format` — Preference/matching text files (1-indexed external form)

pub mod export;
pub mod format;
pub mod generator;
pub mod metrics;
pub mod runner;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
