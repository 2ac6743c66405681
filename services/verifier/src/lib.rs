//! Stability Verifier Service
//!
//! Independent certification of candidate pairings. Given an instance and a
//! pairing from any source, classifies it as exactly one of:
//!
//! - [`Verdict::Invalid`] — not a perfect matching (with the specific defect)
//! - [`Verdict::Unstable`] — valid, but a blocking pair exists (with the
//!   first witness in ascending proposer-then-receiver order)
//! - [`Verdict::Stable`] — a valid, stable matching
//!
//! Validity is always checked before stability; a structurally broken pairing
//! is never reported as unstable. The verifier never mutates its inputs and
//! has no dependency on the engine that produced the pairing.

pub mod stability;
pub mod validity;

use serde::{Deserialize, Serialize};
use std::fmt;
use types::agent::{ProposerId, ReceiverId};
use types::instance::Instance;
use types::pairing::Pairing;

pub use validity::ValidityError;

/// Terminal classification of a candidate pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Valid perfect matching with no blocking pair
    Stable,
    /// Valid perfect matching, but this pair blocks it
    Unstable {
        proposer: ProposerId,
        receiver: ReceiverId,
    },
    /// Not a perfect matching
    Invalid(ValidityError),
}

impl Verdict {
    pub fn is_stable(&self) -> bool {
        matches!(self, Verdict::Stable)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Stable => write!(f, "VALID STABLE"),
            Verdict::Unstable { proposer, receiver } => write!(
                f,
                "UNSTABLE: blocking pair (proposer {proposer}, receiver {receiver})"
            ),
            Verdict::Invalid(defect) => write!(f, "INVALID: {defect}"),
        }
    }
}

/// Classify a candidate pairing against an instance
///
/// Pure function of its inputs: same instance and pairing always produce the
/// same verdict.
pub fn verify(instance: &Instance, pairing: &Pairing) -> Verdict {
    if let Err(defect) = validity::check(instance.n(), pairing) {
        return Verdict::Invalid(defect);
    }
    match stability::find_blocking_pair(instance, pairing) {
        Some((proposer, receiver)) => Verdict::Unstable { proposer, receiver },
        None => Verdict::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(proposer_prefs: Vec<Vec<usize>>, receiver_prefs: Vec<Vec<usize>>) -> Instance {
        Instance::from_raw(proposer_prefs, receiver_prefs).unwrap()
    }

    fn pairing(assignments: &[usize]) -> Pairing {
        let mut pairing = Pairing::unmatched(assignments.len());
        for (p, &r) in assignments.iter().enumerate() {
            pairing.assign(ProposerId::new(p), ReceiverId::new(r));
        }
        pairing
    }

    #[test]
    fn test_trivial_single_pair_stable() {
        let instance = instance(vec![vec![0]], vec![vec![0]]);
        assert_eq!(verify(&instance, &pairing(&[0])), Verdict::Stable);
    }

    #[test]
    fn test_blocking_pair_detected_with_first_witness() {
        // Proposer 0 and receiver 1 prefer each other over their partners in
        // the identity pairing.
        let instance = instance(vec![vec![1, 0], vec![0, 1]], vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(
            verify(&instance, &pairing(&[0, 1])),
            Verdict::Unstable {
                proposer: ProposerId::new(0),
                receiver: ReceiverId::new(1),
            }
        );
    }

    #[test]
    fn test_duplicate_receiver_invalid() {
        let instance = instance(
            vec![vec![0, 1], vec![0, 1]],
            vec![vec![0, 1], vec![0, 1]],
        );
        let verdict = verify(&instance, &pairing(&[1, 1]));
        match verdict {
            Verdict::Invalid(ValidityError::DuplicateReceiver {
                receiver,
                first,
                second,
            }) => {
                assert_eq!(receiver, ReceiverId::new(1));
                assert_eq!(first, ProposerId::new(0));
                assert_eq!(second, ProposerId::new(1));
            }
            other => panic!("expected duplicate-receiver invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_validity_precedes_stability() {
        // Pairing is both incomplete and (if patched up) unstable; the
        // verdict must report the structural defect, never a blocking pair.
        let instance = instance(vec![vec![1, 0], vec![0, 1]], vec![vec![1, 0], vec![0, 1]]);
        let mut incomplete = Pairing::unmatched(2);
        incomplete.assign(ProposerId::new(0), ReceiverId::new(0));
        assert_eq!(
            verify(&instance, &incomplete),
            Verdict::Invalid(ValidityError::UnmatchedProposer {
                proposer: ProposerId::new(1)
            })
        );
    }

    #[test]
    fn test_wrong_size_pairing_invalid() {
        let instance = instance(vec![vec![0, 1], vec![1, 0]], vec![vec![0, 1], vec![1, 0]]);
        let verdict = verify(&instance, &pairing(&[0]));
        assert!(matches!(
            verdict,
            Verdict::Invalid(ValidityError::WrongSize {
                got: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Stable.to_string(), "VALID STABLE");
        let unstable = Verdict::Unstable {
            proposer: ProposerId::new(0),
            receiver: ReceiverId::new(1),
        };
        assert_eq!(
            unstable.to_string(),
            "UNSTABLE: blocking pair (proposer 0, receiver 1)"
        );
    }

    #[test]
    fn test_verdict_serde_round_trip() {
        let verdict = Verdict::Unstable {
            proposer: ProposerId::new(2),
            receiver: ReceiverId::new(0),
        };
        let json = serde_json::to_string(&verdict).unwrap();
        let back: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verdict);
    }
}
