//! Matching Engine Service
//!
//! Proposal-based stable matching (deferred acceptance) over validated
//! preference instances.
//!
//! **Key Invariants:**
//! - Output is always a perfect matching (a bijection between the two sides)
//! - Output is always stable: no proposer-receiver pair prefers each other
//!   over their assigned partners
//! - Output is proposer-optimal and independent of proposal scheduling order
//! - At most n² proposals per run
//!
//! The engine assumes a validated [`types::instance::Instance`] and has no
//! internal failure path; independent certification of its output is the
//! `verifier` crate's job.

pub mod engine;
pub mod events;

pub use engine::{solve, MatchOutcome, MatchingEngine};
pub use events::MatchEvent;
