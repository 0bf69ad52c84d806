//! The loyalty program engine
//!
//! Wraps the domain types with caller validation, ownership policy,
//! journaling, and the guarded treasury withdrawal. Every mutating
//! operation validates before it mutates and records exactly one
//! receipt on success.

use crate::payout::PayoutOutlet;
use loyalty_types::{
    ActorId, Amount, EventJournal, LoyaltyError, LoyaltyResult, MemberRecord, MembershipRoll,
    Points, PointsTotals, ProgramEvent, RewardCatalog, RewardKind, Treasury,
};
use tracing::{info, warn};

/// Initial catalog pricing for a loyalty program
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    pub tshirt_cost: Points,
    pub vip_cost: Points,
    pub hoodie_cost: Points,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            tshirt_cost: Points::new(100),
            vip_cost: Points::new(500),
            hoodie_cost: Points::new(300),
        }
    }
}

/// The loyalty program engine
///
/// Owns all program state and exposes the externally callable
/// operations. Callers are identified by an explicit [`ActorId`]
/// argument; privileged operations check it against the owner slot
/// before any other validation. A zero cost in the configured catalog
/// means that reward starts out unavailable.
pub struct LoyaltyProgram {
    /// The privileged owner identity
    owner: ActorId,
    /// Everyone who has ever joined
    roll: MembershipRoll,
    /// Cumulative issue/redeem counters
    totals: PointsTotals,
    /// Reward pricing
    catalog: RewardCatalog,
    /// Held donations
    treasury: Treasury,
    /// Held while a withdrawal is in flight
    withdraw_guard: bool,
}

impl LoyaltyProgram {
    /// Create a program owned by `owner` with the given catalog pricing
    pub fn new(owner: ActorId, config: ProgramConfig) -> Self {
        Self {
            owner,
            roll: MembershipRoll::new(),
            totals: PointsTotals::new(),
            catalog: RewardCatalog::new(config.tshirt_cost, config.vip_cost, config.hoodie_cost),
            treasury: Treasury::new(),
            withdraw_guard: false,
        }
    }

    // --- Membership ---

    /// Register the caller as a member
    ///
    /// Membership is permanent; a second call fails without touching
    /// any state.
    pub fn join(&mut self, caller: &ActorId, journal: &mut EventJournal) -> LoyaltyResult<()> {
        let record = MemberRecord::new(caller.clone());
        let joined_at = record.joined_at;
        self.roll.enroll(record)?;

        info!(member = %caller, "Member joined");
        journal.record(ProgramEvent::MemberJoined {
            member: caller.clone(),
            joined_at,
        });
        Ok(())
    }

    // --- Points ledger ---

    /// Add `amount` points to the caller's own balance
    pub fn earn_points(
        &mut self,
        caller: &ActorId,
        amount: Points,
        journal: &mut EventJournal,
    ) -> LoyaltyResult<()> {
        let record = self
            .roll
            .member_mut(caller)
            .ok_or_else(|| LoyaltyError::NotMember(caller.clone()))?;
        if amount.is_zero() {
            return Err(LoyaltyError::ZeroAmount);
        }

        record.credit(amount);
        self.totals.record_issue(amount);

        info!(member = %caller, amount = amount.0, "Points earned");
        journal.record(ProgramEvent::PointsEarned {
            member: caller.clone(),
            amount,
        });
        Ok(())
    }

    /// Move `amount` points from the caller to another member
    ///
    /// Total supply is unchanged: the two balances move together or not
    /// at all.
    pub fn transfer_points(
        &mut self,
        caller: &ActorId,
        to: &ActorId,
        amount: Points,
        journal: &mut EventJournal,
    ) -> LoyaltyResult<()> {
        if !self.roll.is_member(caller) {
            return Err(LoyaltyError::NotMember(caller.clone()));
        }
        if to.is_nil() {
            return Err(LoyaltyError::InvalidAddress);
        }
        if to == caller {
            return Err(LoyaltyError::TransferToSelf);
        }
        if !self.roll.is_member(to) {
            return Err(LoyaltyError::NotMember(to.clone()));
        }
        if amount.is_zero() {
            return Err(LoyaltyError::ZeroAmount);
        }

        self.roll
            .member_mut(caller)
            .ok_or_else(|| LoyaltyError::NotMember(caller.clone()))?
            .debit(amount)?;
        self.roll
            .member_mut(to)
            .ok_or_else(|| LoyaltyError::NotMember(to.clone()))?
            .credit(amount);

        info!(from = %caller, to = %to, amount = amount.0, "Points transferred");
        journal.record(ProgramEvent::PointsTransferred {
            from: caller.clone(),
            to: to.clone(),
            amount,
        });
        Ok(())
    }

    /// Issue `amount` points to a member directly (owner only)
    ///
    /// Pure issuance: no source balance is debited.
    pub fn grant_points(
        &mut self,
        caller: &ActorId,
        to: &ActorId,
        amount: Points,
        journal: &mut EventJournal,
    ) -> LoyaltyResult<()> {
        self.require_owner(caller)?;
        if to.is_nil() {
            return Err(LoyaltyError::InvalidAddress);
        }
        let record = self
            .roll
            .member_mut(to)
            .ok_or_else(|| LoyaltyError::NotMember(to.clone()))?;
        if amount.is_zero() {
            return Err(LoyaltyError::ZeroAmount);
        }

        record.credit(amount);
        self.totals.record_issue(amount);

        info!(to = %to, amount = amount.0, "Points granted");
        journal.record(ProgramEvent::PointsGranted {
            to: to.clone(),
            amount,
        });
        Ok(())
    }

    // --- Reward catalog ---

    /// Reprice a reward (owner only; zero is never a valid cost)
    pub fn set_reward_cost(
        &mut self,
        caller: &ActorId,
        reward: RewardKind,
        cost: Points,
        journal: &mut EventJournal,
    ) -> LoyaltyResult<()> {
        self.require_owner(caller)?;
        self.catalog.set_cost(reward, cost)?;

        info!(reward = %reward, cost = cost.0, "Reward cost updated");
        journal.record(ProgramEvent::RewardCostUpdated { reward, cost });
        Ok(())
    }

    /// Redeem a reward against the caller's balance
    pub fn redeem(
        &mut self,
        caller: &ActorId,
        reward: RewardKind,
        journal: &mut EventJournal,
    ) -> LoyaltyResult<()> {
        let cost = self.catalog.cost(reward);
        let record = self
            .roll
            .member_mut(caller)
            .ok_or_else(|| LoyaltyError::NotMember(caller.clone()))?;
        if cost.is_zero() {
            return Err(LoyaltyError::InvalidReward(reward));
        }

        record.debit(cost)?;
        self.totals.record_redemption(cost);

        info!(member = %caller, reward = %reward, cost = cost.0, "Reward redeemed");
        journal.record(ProgramEvent::RewardRedeemed {
            member: caller.clone(),
            reward,
            cost,
        });
        Ok(())
    }

    // --- Treasury ---

    /// Accept a donation from anyone, of any amount
    pub fn donate(&mut self, from: &ActorId, amount: Amount, journal: &mut EventJournal) {
        self.treasury.receive(amount);

        info!(from = %from, amount = amount.0, "Donation received");
        journal.record(ProgramEvent::DonationReceived {
            from: from.clone(),
            amount,
        });
    }

    /// Withdraw the whole treasury balance to `to` (owner only)
    ///
    /// Delivery through the outlet may hand control to untrusted
    /// recipient code. Two defenses keep a hostile recipient from
    /// draining twice: the balance is zeroed before delivery, and a
    /// guard flag rejects any nested withdrawal outright. The guard is
    /// released on every exit path.
    pub fn withdraw_donations(
        &mut self,
        caller: &ActorId,
        to: &ActorId,
        outlet: &dyn PayoutOutlet,
        journal: &mut EventJournal,
    ) -> LoyaltyResult<Amount> {
        self.require_owner(caller)?;
        if to.is_nil() {
            return Err(LoyaltyError::InvalidAddress);
        }
        if self.withdraw_guard {
            warn!(caller = %caller, "Rejected reentrant withdrawal");
            return Err(LoyaltyError::Treasury(
                "reentrant withdrawal rejected".to_string(),
            ));
        }

        self.withdraw_guard = true;
        let result = self.withdraw_guarded(caller, to, outlet, journal);
        self.withdraw_guard = false;
        result
    }

    fn withdraw_guarded(
        &mut self,
        caller: &ActorId,
        to: &ActorId,
        outlet: &dyn PayoutOutlet,
        journal: &mut EventJournal,
    ) -> LoyaltyResult<Amount> {
        if self.treasury.balance.is_zero() {
            return Err(LoyaltyError::Treasury("no donations to withdraw".to_string()));
        }

        // Zero the balance before delivering; a nested call must see an
        // empty treasury.
        let amount = self.treasury.drain();
        if let Err(source) = outlet.deliver(self, to, amount, journal) {
            // Put the drained value back so a retry sees it.
            self.treasury.receive(amount);
            warn!(
                channel = outlet.channel(),
                error = %source,
                "Withdrawal delivery failed"
            );
            return Err(LoyaltyError::Treasury(format!("withdraw failed: {}", source)));
        }

        info!(
            by = %caller,
            to = %to,
            amount = amount.0,
            channel = outlet.channel(),
            "Donations withdrawn"
        );
        journal.record(ProgramEvent::DonationsWithdrawn {
            by: caller.clone(),
            amount,
        });
        Ok(amount)
    }

    // --- Ownership ---

    /// Hand the owner slot to another identity (owner only)
    pub fn transfer_ownership(
        &mut self,
        caller: &ActorId,
        new_owner: &ActorId,
        journal: &mut EventJournal,
    ) -> LoyaltyResult<()> {
        self.require_owner(caller)?;
        if new_owner.is_nil() {
            return Err(LoyaltyError::InvalidAddress);
        }

        let previous_owner = self.owner.clone();
        self.owner = new_owner.clone();

        info!(previous = %previous_owner, new = %new_owner, "Ownership transferred");
        journal.record(ProgramEvent::OwnershipTransferred {
            previous_owner,
            new_owner: new_owner.clone(),
        });
        Ok(())
    }

    fn require_owner(&self, caller: &ActorId) -> LoyaltyResult<()> {
        if caller != &self.owner {
            warn!(caller = %caller, "Rejected privileged call from non-owner");
            return Err(LoyaltyError::NotOwner(caller.clone()));
        }
        Ok(())
    }

    // --- Query methods ---

    pub fn owner(&self) -> &ActorId {
        &self.owner
    }

    pub fn is_member(&self, actor_id: &ActorId) -> bool {
        self.roll.is_member(actor_id)
    }

    pub fn member(&self, actor_id: &ActorId) -> Option<&MemberRecord> {
        self.roll.member(actor_id)
    }

    pub fn member_count(&self) -> usize {
        self.roll.member_count()
    }

    pub fn points_balance(&self, actor_id: &ActorId) -> Points {
        self.roll
            .member(actor_id)
            .map(|m| m.points)
            .unwrap_or_else(Points::zero)
    }

    pub fn reward_cost(&self, reward: RewardKind) -> Points {
        self.catalog.cost(reward)
    }

    pub fn total_points_issued(&self) -> Points {
        self.totals.issued()
    }

    pub fn total_points_redeemed(&self) -> Points {
        self.totals.redeemed()
    }

    pub fn total_member_points(&self) -> Points {
        self.roll.total_points()
    }

    pub fn treasury_balance(&self) -> Amount {
        self.treasury.balance
    }
}
