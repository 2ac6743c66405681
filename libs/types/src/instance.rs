//! Validated problem instances
//!
//! An [`Instance`] owns the preference data for one matching problem: `n`
//! agents per side, each holding a strict total order over the opposite side.
//! Construction validates every list as a permutation of `0..n`; once built,
//! an instance is immutable for the lifetime of any run that uses it.

use crate::agent::{ProposerId, ReceiverId, Side};
use crate::errors::InstanceError;
use serde::{Deserialize, Serialize};

/// One matching problem: preference permutations for both sides
///
/// `proposer_prefs[p]` lists receiver indices in strict descending preference
/// (most preferred first); `receiver_prefs[r]` likewise for proposers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    n: usize,
    proposer_prefs: Vec<Vec<ReceiverId>>,
    receiver_prefs: Vec<Vec<ProposerId>>,
}

impl Instance {
    /// Build an instance, validating both preference tables
    ///
    /// Both sides must have the same positive number of agents, and every
    /// preference list must be a permutation of the opposite side's indices.
    pub fn new(
        proposer_prefs: Vec<Vec<ReceiverId>>,
        receiver_prefs: Vec<Vec<ProposerId>>,
    ) -> Result<Self, InstanceError> {
        let n = proposer_prefs.len();
        if receiver_prefs.len() != n {
            return Err(InstanceError::SideSizeMismatch {
                proposers: n,
                receivers: receiver_prefs.len(),
            });
        }
        if n == 0 {
            return Err(InstanceError::Empty);
        }

        for (agent, prefs) in proposer_prefs.iter().enumerate() {
            check_permutation(Side::Proposer, agent, prefs.iter().map(|r| r.index()), n)?;
        }
        for (agent, prefs) in receiver_prefs.iter().enumerate() {
            check_permutation(Side::Receiver, agent, prefs.iter().map(|p| p.index()), n)?;
        }

        Ok(Self {
            n,
            proposer_prefs,
            receiver_prefs,
        })
    }

    /// Build an instance from raw zero-based index lists
    pub fn from_raw(
        proposer_prefs: Vec<Vec<usize>>,
        receiver_prefs: Vec<Vec<usize>>,
    ) -> Result<Self, InstanceError> {
        Self::new(
            proposer_prefs
                .into_iter()
                .map(|prefs| prefs.into_iter().map(ReceiverId::new).collect())
                .collect(),
            receiver_prefs
                .into_iter()
                .map(|prefs| prefs.into_iter().map(ProposerId::new).collect())
                .collect(),
        )
    }

    /// Number of agents on each side
    pub fn n(&self) -> usize {
        self.n
    }

    /// Proposer `p`'s preference order over receivers, most preferred first
    pub fn proposer_prefs(&self, p: ProposerId) -> &[ReceiverId] {
        &self.proposer_prefs[p.index()]
    }

    /// Receiver `r`'s preference order over proposers, most preferred first
    pub fn receiver_prefs(&self, r: ReceiverId) -> &[ProposerId] {
        &self.receiver_prefs[r.index()]
    }

    /// Iterator over all proposer ids in ascending order
    pub fn proposers(&self) -> impl Iterator<Item = ProposerId> {
        (0..self.n).map(ProposerId::new)
    }

    /// Iterator over all receiver ids in ascending order
    pub fn receivers(&self) -> impl Iterator<Item = ReceiverId> {
        (0..self.n).map(ReceiverId::new)
    }
}

/// Validate one preference list as a permutation of `0..n`
fn check_permutation(
    side: Side,
    agent: usize,
    entries: impl ExactSizeIterator<Item = usize>,
    n: usize,
) -> Result<(), InstanceError> {
    if entries.len() != n {
        return Err(InstanceError::WrongListLength {
            side,
            agent,
            got: entries.len(),
            expected: n,
        });
    }
    let mut seen = vec![false; n];
    for index in entries {
        if index >= n {
            return Err(InstanceError::IndexOutOfRange {
                side,
                agent,
                index,
                n,
            });
        }
        if seen[index] {
            return Err(InstanceError::DuplicateEntry { side, agent, index });
        }
        seen[index] = true;
    }
    Ok(())
}
