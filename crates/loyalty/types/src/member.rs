//! Membership roll: who belongs to the program
//!
//! The roll tracks every member record, keyed by actor identity. It is
//! the source of truth for "who's in". Records are created exactly once
//! and never removed; absence from the map means the actor never joined.

use crate::{ActorId, LoyaltyError, LoyaltyResult, Points};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A record for a single program member
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// The member's identity
    pub actor_id: ActorId,
    /// Current point balance
    pub points: Points,
    /// When the member joined
    pub joined_at: DateTime<Utc>,
}

impl MemberRecord {
    /// Create a fresh record with a zero balance, joined now
    pub fn new(actor_id: ActorId) -> Self {
        Self {
            actor_id,
            points: Points::zero(),
            joined_at: Utc::now(),
        }
    }

    /// Add points to the balance
    ///
    /// Balances are fixed-width; an addition that would wrap aborts
    /// instead of silently wrapping.
    pub fn credit(&mut self, amount: Points) {
        self.points = match self.points.checked_add(amount) {
            Some(balance) => balance,
            None => panic!("points balance overflowed for member {}", self.actor_id),
        };
    }

    /// Remove points from the balance (returns error if insufficient)
    pub fn debit(&mut self, amount: Points) -> LoyaltyResult<()> {
        if self.points < amount {
            return Err(LoyaltyError::InsufficientPoints {
                have: self.points.0,
                need: amount.0,
            });
        }
        self.points = self.points.saturating_sub(amount);
        Ok(())
    }
}

/// The membership roll for a loyalty program
///
/// This is a data structure, not an execution engine: it stores records
/// and rejects duplicates, nothing more.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MembershipRoll {
    /// All member records, keyed by actor ID
    pub members: HashMap<ActorId, MemberRecord>,
}

impl MembershipRoll {
    /// Create a new empty roll
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
        }
    }

    /// Add a new member to the roll
    pub fn enroll(&mut self, record: MemberRecord) -> LoyaltyResult<()> {
        if self.members.contains_key(&record.actor_id) {
            return Err(LoyaltyError::AlreadyMember(record.actor_id.clone()));
        }
        self.members.insert(record.actor_id.clone(), record);
        Ok(())
    }

    /// Get a member record
    pub fn member(&self, actor_id: &ActorId) -> Option<&MemberRecord> {
        self.members.get(actor_id)
    }

    /// Get a mutable member record
    pub fn member_mut(&mut self, actor_id: &ActorId) -> Option<&mut MemberRecord> {
        self.members.get_mut(actor_id)
    }

    /// Check whether an actor has joined
    pub fn is_member(&self, actor_id: &ActorId) -> bool {
        self.members.contains_key(actor_id)
    }

    /// Number of members on the roll
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Sum of every member balance
    pub fn total_points(&self) -> Points {
        self.members
            .values()
            .fold(Points::zero(), |acc, m| acc.saturating_add(m.points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_roll() -> MembershipRoll {
        MembershipRoll::new()
    }

    #[test]
    fn test_enroll() {
        let mut roll = make_roll();
        roll.enroll(MemberRecord::new(ActorId::new("alice"))).unwrap();

        assert!(roll.is_member(&ActorId::new("alice")));
        assert_eq!(roll.member_count(), 1);
        assert_eq!(
            roll.member(&ActorId::new("alice")).unwrap().points,
            Points::zero()
        );
    }

    #[test]
    fn test_duplicate_enroll() {
        let mut roll = make_roll();
        roll.enroll(MemberRecord::new(ActorId::new("alice"))).unwrap();

        let result = roll.enroll(MemberRecord::new(ActorId::new("alice")));
        assert!(matches!(result, Err(LoyaltyError::AlreadyMember(_))));
        assert_eq!(roll.member_count(), 1);
    }

    #[test]
    fn test_credit_and_debit() {
        let mut record = MemberRecord::new(ActorId::new("alice"));
        record.credit(Points::new(100));
        assert_eq!(record.points, Points::new(100));

        record.debit(Points::new(30)).unwrap();
        assert_eq!(record.points, Points::new(70));
    }

    #[test]
    fn test_debit_insufficient() {
        let mut record = MemberRecord::new(ActorId::new("alice"));
        record.credit(Points::new(10));

        let result = record.debit(Points::new(25));
        assert!(matches!(
            result,
            Err(LoyaltyError::InsufficientPoints { have: 10, need: 25 })
        ));
        assert_eq!(record.points, Points::new(10)); // Unchanged
    }

    #[test]
    #[should_panic(expected = "points balance overflowed")]
    fn test_credit_overflow_aborts() {
        let mut record = MemberRecord::new(ActorId::new("alice"));
        record.credit(Points::new(u128::MAX));
        record.credit(Points::new(1));
    }

    #[test]
    fn test_total_points() {
        let mut roll = make_roll();
        roll.enroll(MemberRecord::new(ActorId::new("alice"))).unwrap();
        roll.enroll(MemberRecord::new(ActorId::new("bob"))).unwrap();

        roll.member_mut(&ActorId::new("alice"))
            .unwrap()
            .credit(Points::new(40));
        roll.member_mut(&ActorId::new("bob"))
            .unwrap()
            .credit(Points::new(2));

        assert_eq!(roll.total_points(), Points::new(42));
    }
}
