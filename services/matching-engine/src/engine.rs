//! Matching engine core
//!
//! Deferred-acceptance loop over a validated instance. Free proposers sit on
//! a FIFO work-list instead of being rediscovered by a linear rescan each
//! round; the proposer-optimal matching is unique, so the scheduling order
//! cannot change the result.

use std::collections::VecDeque;

use types::agent::{ProposerId, ReceiverId};
use types::instance::Instance;
use types::pairing::Pairing;
use types::rank::ReceiverRanks;

use crate::events::MatchEvent;

/// Result of one engine run
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// The stable pairing, complete by construction
    pub pairing: Pairing,
    /// Total proposals made; at most n²
    pub proposals: u64,
    /// Step trace, empty unless recording was enabled
    pub events: Vec<MatchEvent>,
}

/// Deferred-acceptance matching engine
///
/// Owns all working state for a single run: both match maps, per-proposer
/// cursors into their preference lists, the receiver-side rank table, and the
/// work-list of free proposers. The borrowed instance is never mutated.
pub struct MatchingEngine<'a> {
    instance: &'a Instance,
    receiver_ranks: ReceiverRanks,
    /// Current match per proposer (None = free)
    proposer_match: Vec<Option<ReceiverId>>,
    /// Current match per receiver (None = never proposed to)
    receiver_match: Vec<Option<ProposerId>>,
    /// Position of the next receiver each proposer has not yet proposed to
    next_choice: Vec<usize>,
    /// Free proposers, seeded in ascending index order
    free: VecDeque<ProposerId>,
    proposals: u64,
    record_events: bool,
    events: Vec<MatchEvent>,
}

impl<'a> MatchingEngine<'a> {
    /// Create an engine for one instance, precomputing receiver ranks
    pub fn new(instance: &'a Instance) -> Self {
        let n = instance.n();
        Self {
            instance,
            receiver_ranks: ReceiverRanks::build(instance),
            proposer_match: vec![None; n],
            receiver_match: vec![None; n],
            next_choice: vec![0; n],
            free: instance.proposers().collect(),
            proposals: 0,
            record_events: false,
            events: Vec::new(),
        }
    }

    /// Enable or disable the step trace for this run
    pub fn record_events(mut self, enabled: bool) -> Self {
        self.record_events = enabled;
        self
    }

    /// Run deferred acceptance to completion
    ///
    /// Each iteration pops a free proposer and advances its cursor by one, so
    /// the loop makes at most n² proposals before every proposer is matched.
    pub fn run(mut self) -> MatchOutcome {
        let n = self.instance.n();

        while let Some(proposer) = self.free.pop_front() {
            let cursor = self.next_choice[proposer.index()];
            if cursor >= n {
                // List exhausted; cannot happen while any receiver is free
                continue;
            }
            let receiver = self.instance.proposer_prefs(proposer)[cursor];
            self.next_choice[proposer.index()] = cursor + 1;
            self.proposals += 1;
            self.emit(MatchEvent::Proposed { proposer, receiver });

            match self.receiver_match[receiver.index()] {
                None => self.accept(proposer, receiver),
                Some(current) => {
                    if self.receiver_ranks.prefers(receiver, proposer, current) {
                        self.proposer_match[current.index()] = None;
                        self.free.push_back(current);
                        self.emit(MatchEvent::Displaced {
                            receiver,
                            displaced: current,
                            by: proposer,
                        });
                        self.accept(proposer, receiver);
                    } else {
                        self.free.push_back(proposer);
                        self.emit(MatchEvent::Rejected { proposer, receiver });
                    }
                }
            }
        }

        MatchOutcome {
            pairing: Pairing::from_assignments(self.proposer_match),
            proposals: self.proposals,
            events: self.events,
        }
    }

    /// Record the pairing both ways
    fn accept(&mut self, proposer: ProposerId, receiver: ReceiverId) {
        self.proposer_match[proposer.index()] = Some(receiver);
        self.receiver_match[receiver.index()] = Some(proposer);
        self.emit(MatchEvent::Accepted { proposer, receiver });
    }

    fn emit(&mut self, event: MatchEvent) {
        if self.record_events {
            self.events.push(event);
        }
    }
}

/// Run the engine and return only the pairing
pub fn solve(instance: &Instance) -> Pairing {
    MatchingEngine::new(instance).run().pairing
}
