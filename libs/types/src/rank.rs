//! Derived rank tables
//!
//! A rank table inverts a side's preference orders so that "does agent `a`
//! prefer `x` over `y`" becomes two array lookups instead of a list scan.
//! Invariant: `rank[a][order[a][k]] == k` for every position `k`. Tables are
//! a pure precomputation — rebuilt per run, never mutated afterwards.

use crate::agent::{ProposerId, ReceiverId};
use crate::instance::Instance;

/// Rank of each proposer from each receiver's perspective
///
/// `rank(r, p)` is the position of `p` in `r`'s preference list; lower is
/// more preferred.
#[derive(Debug, Clone)]
pub struct ReceiverRanks {
    ranks: Vec<Vec<usize>>,
}

impl ReceiverRanks {
    /// Precompute ranks for every receiver in the instance
    pub fn build(instance: &Instance) -> Self {
        let ranks = instance
            .receivers()
            .map(|r| invert(instance.receiver_prefs(r).iter().map(|p| p.index())))
            .collect();
        Self { ranks }
    }

    /// Rank of proposer `p` in receiver `r`'s list (0 = most preferred)
    pub fn rank(&self, r: ReceiverId, p: ProposerId) -> usize {
        self.ranks[r.index()][p.index()]
    }

    /// True if receiver `r` strictly prefers proposer `a` over proposer `b`
    pub fn prefers(&self, r: ReceiverId, a: ProposerId, b: ProposerId) -> bool {
        self.rank(r, a) < self.rank(r, b)
    }
}

/// Rank of each receiver from each proposer's perspective
#[derive(Debug, Clone)]
pub struct ProposerRanks {
    ranks: Vec<Vec<usize>>,
}

impl ProposerRanks {
    /// Precompute ranks for every proposer in the instance
    pub fn build(instance: &Instance) -> Self {
        let ranks = instance
            .proposers()
            .map(|p| invert(instance.proposer_prefs(p).iter().map(|r| r.index())))
            .collect();
        Self { ranks }
    }

    /// Rank of receiver `r` in proposer `p`'s list (0 = most preferred)
    pub fn rank(&self, p: ProposerId, r: ReceiverId) -> usize {
        self.ranks[p.index()][r.index()]
    }

    /// True if proposer `p` strictly prefers receiver `a` over receiver `b`
    pub fn prefers(&self, p: ProposerId, a: ReceiverId, b: ReceiverId) -> bool {
        self.rank(p, a) < self.rank(p, b)
    }
}

/// Invert one preference order into a rank lookup
fn invert(order: impl ExactSizeIterator<Item = usize>) -> Vec<usize> {
    let mut ranks = vec![0; order.len()];
    for (rank, index) in order.enumerate() {
        ranks[index] = rank;
    }
    ranks
}
