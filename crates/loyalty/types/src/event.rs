//! Event journal: the program's notification sink
//!
//! Every mutating operation records exactly one receipt. The journal is
//! append-only and write-only from the engine's point of view; it exists
//! for external observability and audit, never for control flow.

use crate::{ActorId, Amount, Points, RewardKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification emitted by a mutating operation
///
/// Each variant carries the operation's key parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramEvent {
    /// An actor joined the program
    MemberJoined {
        member: ActorId,
        joined_at: DateTime<Utc>,
    },
    /// A member earned points
    PointsEarned { member: ActorId, amount: Points },
    /// Points moved between two members
    PointsTransferred {
        from: ActorId,
        to: ActorId,
        amount: Points,
    },
    /// The owner issued points directly to a member
    PointsGranted { to: ActorId, amount: Points },
    /// The owner repriced a reward
    RewardCostUpdated { reward: RewardKind, cost: Points },
    /// A member redeemed a reward
    RewardRedeemed {
        member: ActorId,
        reward: RewardKind,
        cost: Points,
    },
    /// The treasury accepted a donation
    DonationReceived { from: ActorId, amount: Amount },
    /// The owner withdrew the treasury balance
    DonationsWithdrawn { by: ActorId, amount: Amount },
    /// The owner slot changed hands
    OwnershipTransferred {
        previous_owner: ActorId,
        new_owner: ActorId,
    },
}

/// A journaled notification with identity and time attached
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramReceipt {
    /// Unique receipt identifier
    pub receipt_id: String,
    /// The notification itself
    pub event: ProgramEvent,
    /// When the receipt was recorded
    pub recorded_at: DateTime<Utc>,
}

impl ProgramReceipt {
    pub fn new(event: ProgramEvent) -> Self {
        Self {
            receipt_id: uuid::Uuid::new_v4().to_string(),
            event,
            recorded_at: Utc::now(),
        }
    }
}

/// The append-only receipt log
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct EventJournal {
    /// All receipts, oldest first
    pub receipts: Vec<ProgramReceipt>,
}

impl EventJournal {
    /// Create a new empty journal
    pub fn new() -> Self {
        Self {
            receipts: Vec::new(),
        }
    }

    /// Record an event as a fresh receipt
    pub fn record(&mut self, event: ProgramEvent) {
        self.receipts.push(ProgramReceipt::new(event));
    }

    /// All receipts, oldest first
    pub fn receipts(&self) -> &[ProgramReceipt] {
        &self.receipts
    }

    /// Total number of receipts
    pub fn receipt_count(&self) -> usize {
        self.receipts.len()
    }

    /// The most recent receipt, if any
    pub fn last(&self) -> Option<&ProgramReceipt> {
        self.receipts.last()
    }
}
