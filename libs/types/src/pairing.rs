//! Proposer-to-receiver assignments
//!
//! A [`Pairing`] maps each proposer to at most one receiver. During an engine
//! run it is mutable working state with unmatched slots; once returned it is
//! treated as an immutable value. The type deliberately admits incomplete and
//! non-injective states — classifying those is the verifier's job, so the
//! data model must be able to represent them.

use crate::agent::{ProposerId, ReceiverId};
use serde::{Deserialize, Serialize};

/// Assignment from proposer indices to receiver indices, possibly partial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    slots: Vec<Option<ReceiverId>>,
}

impl Pairing {
    /// Create a pairing of size `n` with every proposer unmatched
    pub fn unmatched(n: usize) -> Self {
        Self {
            slots: vec![None; n],
        }
    }

    /// Create from per-proposer assignments
    pub fn from_assignments(slots: Vec<Option<ReceiverId>>) -> Self {
        Self { slots }
    }

    /// Number of proposer slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the pairing has no proposer slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Receiver currently assigned to proposer `p`, if any
    pub fn assignment(&self, p: ProposerId) -> Option<ReceiverId> {
        self.slots[p.index()]
    }

    /// Assign receiver `r` to proposer `p`, replacing any previous assignment
    pub fn assign(&mut self, p: ProposerId, r: ReceiverId) {
        self.slots[p.index()] = Some(r);
    }

    /// Mark proposer `p` unmatched
    pub fn clear(&mut self, p: ProposerId) {
        self.slots[p.index()] = None;
    }

    /// True if every proposer has an assigned receiver
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Iterator over all slots in ascending proposer order
    pub fn iter(&self) -> impl Iterator<Item = (ProposerId, Option<ReceiverId>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(p, &r)| (ProposerId::new(p), r))
    }

    /// Iterator over matched pairs only, in ascending proposer order
    pub fn matched_pairs(&self) -> impl Iterator<Item = (ProposerId, ReceiverId)> + '_ {
        self.iter().filter_map(|(p, r)| r.map(|r| (p, r)))
    }
}
