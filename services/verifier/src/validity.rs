//! Perfect-matching validity check
//!
//! Runs before any stability reasoning. Defects are first-class results, not
//! errors: an incomplete or non-injective pairing is a legitimate input that
//! classifies as invalid.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::agent::{ProposerId, ReceiverId};
use types::pairing::Pairing;

/// Structural defect making a pairing not a perfect matching
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidityError {
    #[error("pairing has {got} proposer slots, expected {expected}")]
    WrongSize { got: usize, expected: usize },

    #[error("proposer {proposer} is not matched")]
    UnmatchedProposer { proposer: ProposerId },

    #[error("receiver {receiver} is matched to both proposer {first} and proposer {second}")]
    DuplicateReceiver {
        receiver: ReceiverId,
        first: ProposerId,
        second: ProposerId,
    },

    #[error("receivers {} are not matched to any proposer", fmt_receivers(.receivers))]
    UncoveredReceivers { receivers: Vec<ReceiverId> },
}

fn fmt_receivers(receivers: &[ReceiverId]) -> String {
    let ids: Vec<String> = receivers.iter().map(|r| r.to_string()).collect();
    ids.join(", ")
}

/// Check that a pairing is a bijection between the two `n`-agent sides
///
/// Defects are reported in a fixed order: size mismatch, then the first
/// unmatched proposer or duplicate receiver in ascending proposer order, then
/// (defensively) uncovered receivers. With equal sides and no duplicates the
/// last check cannot fire; it guards against logic contradictions only.
pub fn check(n: usize, pairing: &Pairing) -> Result<(), ValidityError> {
    if pairing.len() != n {
        return Err(ValidityError::WrongSize {
            got: pairing.len(),
            expected: n,
        });
    }

    let mut matched_to: Vec<Option<ProposerId>> = vec![None; n];
    for (proposer, assignment) in pairing.iter() {
        let receiver = assignment.ok_or(ValidityError::UnmatchedProposer { proposer })?;
        if let Some(first) = matched_to[receiver.index()] {
            return Err(ValidityError::DuplicateReceiver {
                receiver,
                first,
                second: proposer,
            });
        }
        matched_to[receiver.index()] = Some(proposer);
    }

    let uncovered: Vec<ReceiverId> = matched_to
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_none())
        .map(|(r, _)| ReceiverId::new(r))
        .collect();
    if !uncovered.is_empty() {
        return Err(ValidityError::UncoveredReceivers {
            receivers: uncovered,
        });
    }

    Ok(())
}
