//! Types library for the stable matching system
//!
//! This library provides all core type definitions shared by the matching
//! engine and the stability verifier, ensuring type safety and deterministic
//! behavior across both components.
//!
//! # Modules
//! - `agent`: Side-tagged agent indices (ProposerId, ReceiverId)
//! - `instance`: Validated problem instances (preference permutations)
//! - `rank`: Derived rank tables for O(1) preference comparison
//! - `pairing`: Proposer-to-receiver assignments, possibly partial
//! - `errors`: Error taxonomy

// Public modules
pub mod agent;
pub mod errors;
pub mod instance;
pub mod pairing;
pub mod rank;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::agent::*;
    pub use crate::errors::*;
    pub use crate::instance::*;
    pub use crate::pairing::*;
    pub use crate::rank::*;
}
