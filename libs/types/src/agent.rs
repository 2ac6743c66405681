//! Side-tagged agent indices
//!
//! Both sides of an instance are dense index sets `0..n`. Wrapping the raw
//! index in a per-side newtype keeps proposer and receiver indices from being
//! mixed up across the engine and verifier APIs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a proposer-side agent (a hospital in the classical framing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposerId(usize);

impl ProposerId {
    /// Create from a zero-based index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the zero-based index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ProposerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a receiver-side agent (a student in the classical framing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiverId(usize);

impl ReceiverId {
    /// Create from a zero-based index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the zero-based index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ReceiverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the instance an agent belongs to
///
/// Used by error messages that apply symmetrically to both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Proposer,
    Receiver,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Proposer => write!(f, "proposer"),
            Side::Receiver => write!(f, "receiver"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_zero_based() {
        assert_eq!(ProposerId::new(3).to_string(), "3");
        assert_eq!(ReceiverId::new(0).to_string(), "0");
    }

    #[test]
    fn test_ids_serde_transparent() {
        let json = serde_json::to_string(&ProposerId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: ProposerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProposerId::new(7));
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Proposer.to_string(), "proposer");
        assert_eq!(Side::Receiver.to_string(), "receiver");
    }
}
