//! Point quantities and the global issue/redeem counters
//!
//! Points are an unsigned 128-bit unit of account. Additions that would
//! wrap are treated as ledger corruption and abort; they are never
//! surfaced as recoverable errors.

use serde::{Deserialize, Serialize};

/// A quantity of loyalty points
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Points(pub u128);

impl Points {
    pub fn new(value: u128) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}pts", self.0)
    }
}

impl std::ops::Add for Points {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Points {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

/// Cumulative issue and redemption counters for the whole ledger
///
/// Both counters only ever grow. Redemptions can never exceed cumulative
/// issuance; `record_redemption` asserts that after every increment, and
/// a violation aborts because it means the ledger's own bookkeeping is
/// corrupt, not that a caller made a bad call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PointsTotals {
    issued: Points,
    redeemed: Points,
}

impl PointsTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total points ever issued (earned or granted)
    pub fn issued(&self) -> Points {
        self.issued
    }

    /// Total points ever redeemed
    pub fn redeemed(&self) -> Points {
        self.redeemed
    }

    /// Record an issuance of `amount` points
    pub fn record_issue(&mut self, amount: Points) {
        self.issued = match self.issued.checked_add(amount) {
            Some(total) => total,
            None => panic!("total points issued overflowed adding {}", amount),
        };
    }

    /// Record a redemption of `amount` points
    pub fn record_redemption(&mut self, amount: Points) {
        self.redeemed = match self.redeemed.checked_add(amount) {
            Some(total) => total,
            None => panic!("total points redeemed overflowed adding {}", amount),
        };
        assert!(
            self.redeemed <= self.issued,
            "ledger corrupted: total redeemed {} exceeds total issued {}",
            self.redeemed,
            self.issued
        );
    }
}
