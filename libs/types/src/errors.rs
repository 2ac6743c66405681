//! Error types for instance construction
//!
//! Malformed preference data is rejected here, before either algorithm runs.
//! The engine and verifier assume a validated `Instance` and have no input
//! failure paths of their own.

use crate::agent::Side;
use thiserror::Error;

/// Rejections raised while constructing an [`crate::instance::Instance`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("instance is empty: n must be positive")]
    Empty,

    #[error("side sizes differ: {proposers} proposers vs {receivers} receivers")]
    SideSizeMismatch { proposers: usize, receivers: usize },

    #[error("{side} {agent}: preference list has {got} entries, expected {expected}")]
    WrongListLength {
        side: Side,
        agent: usize,
        got: usize,
        expected: usize,
    },

    #[error("{side} {agent}: preference list contains index {index}, valid range is 0..{n}")]
    IndexOutOfRange {
        side: Side,
        agent: usize,
        index: usize,
        n: usize,
    },

    #[error("{side} {agent}: preference list contains index {index} more than once")]
    DuplicateEntry {
        side: Side,
        agent: usize,
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_list_length_display() {
        let err = InstanceError::WrongListLength {
            side: Side::Proposer,
            agent: 2,
            got: 3,
            expected: 4,
        };
        assert_eq!(
            err.to_string(),
            "proposer 2: preference list has 3 entries, expected 4"
        );
    }

    #[test]
    fn test_duplicate_entry_display() {
        let err = InstanceError::DuplicateEntry {
            side: Side::Receiver,
            agent: 0,
            index: 1,
        };
        assert!(err.to_string().contains("more than once"));
        assert!(err.to_string().starts_with("receiver 0"));
    }
}
