//! Blocking-pair scan
//!
//! Exhaustive check over all n² proposer-receiver combinations, ascending
//! proposer index outer, ascending receiver index inner. The first blocking
//! pair found is the witness; no structural shortcut prunes the scan.
//! Precondition: the pairing already passed the validity check.

use types::agent::{ProposerId, ReceiverId};
use types::instance::Instance;
use types::pairing::Pairing;
use types::rank::{ProposerRanks, ReceiverRanks};

/// Find the first blocking pair of a valid pairing, if any
///
/// A pair (p, r) not matched to each other blocks the pairing when `p` ranks
/// `r` strictly better than its own match and `r` ranks `p` strictly better
/// than its own match. Returns `None` iff the pairing is stable.
pub fn find_blocking_pair(
    instance: &Instance,
    pairing: &Pairing,
) -> Option<(ProposerId, ReceiverId)> {
    let proposer_ranks = ProposerRanks::build(instance);
    let receiver_ranks = ReceiverRanks::build(instance);

    // Inverse pairing: validity guarantees every receiver is covered once
    let mut receiver_match: Vec<ProposerId> = vec![ProposerId::new(0); instance.n()];
    for (proposer, receiver) in pairing.matched_pairs() {
        receiver_match[receiver.index()] = proposer;
    }

    for proposer in instance.proposers() {
        let matched_receiver = pairing
            .assignment(proposer)
            .expect("validity check guarantees a complete pairing");
        for receiver in instance.receivers() {
            if receiver == matched_receiver {
                continue;
            }
            let matched_proposer = receiver_match[receiver.index()];
            if proposer_ranks.prefers(proposer, receiver, matched_receiver)
                && receiver_ranks.prefers(receiver, proposer, matched_proposer)
            {
                return Some((proposer, receiver));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairing(assignments: &[usize]) -> Pairing {
        let mut pairing = Pairing::unmatched(assignments.len());
        for (p, &r) in assignments.iter().enumerate() {
            pairing.assign(ProposerId::new(p), ReceiverId::new(r));
        }
        pairing
    }

    #[test]
    fn test_stable_pairing_has_no_witness() {
        let instance = Instance::from_raw(
            vec![vec![0, 1, 2], vec![1, 0, 2], vec![0, 1, 2]],
            vec![vec![1, 0, 2], vec![0, 1, 2], vec![0, 1, 2]],
        )
        .unwrap();
        assert_eq!(find_blocking_pair(&instance, &pairing(&[0, 1, 2])), None);
    }

    #[test]
    fn test_mutual_first_choices_block() {
        let instance = Instance::from_raw(
            vec![vec![1, 0], vec![0, 1]],
            vec![vec![1, 0], vec![0, 1]],
        )
        .unwrap();
        assert_eq!(
            find_blocking_pair(&instance, &pairing(&[0, 1])),
            Some((ProposerId::new(0), ReceiverId::new(1)))
        );
    }

    #[test]
    fn test_one_sided_preference_does_not_block() {
        // Proposer 0 would rather have receiver 1, but receiver 1 is happy.
        let instance = Instance::from_raw(
            vec![vec![1, 0], vec![1, 0]],
            vec![vec![0, 1], vec![1, 0]],
        )
        .unwrap();
        assert_eq!(find_blocking_pair(&instance, &pairing(&[0, 1])), None);
    }

    #[test]
    fn test_witness_follows_scan_order() {
        // Swapping both pairs of this instance leaves two blocking pairs;
        // the scan must surface the one with the lowest proposer index.
        let instance = Instance::from_raw(
            vec![vec![0, 1], vec![1, 0]],
            vec![vec![0, 1], vec![1, 0]],
        )
        .unwrap();
        assert_eq!(
            find_blocking_pair(&instance, &pairing(&[1, 0])),
            Some((ProposerId::new(0), ReceiverId::new(0)))
        );
    }
}
