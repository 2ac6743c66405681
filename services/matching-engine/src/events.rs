//! Event structures for the matching engine
//!
//! One event per state transition in a run, in the order the engine performed
//! them. Recording is opt-in; the trace exists for replay inspection and
//! debugging, not for correctness.

use serde::{Deserialize, Serialize};
use types::agent::{ProposerId, ReceiverId};

/// A single step of the deferred-acceptance loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Proposer offered to the next receiver on its list
    Proposed {
        proposer: ProposerId,
        receiver: ReceiverId,
    },
    /// Receiver was unmatched, or preferred the new proposer; pair formed
    Accepted {
        proposer: ProposerId,
        receiver: ReceiverId,
    },
    /// Receiver traded up: its previous match is free again
    Displaced {
        receiver: ReceiverId,
        displaced: ProposerId,
        by: ProposerId,
    },
    /// Receiver kept its current match; proposer stays free
    Rejected {
        proposer: ProposerId,
        receiver: ReceiverId,
    },
}
