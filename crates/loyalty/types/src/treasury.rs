//! Donation treasury: value held by the program
//!
//! The treasury is a single balance funded by inbound donations. It is
//! a data structure, not an execution engine; the withdrawal policy
//! (who may drain it, and the reentrancy guard) lives in the runtime.

use serde::{Deserialize, Serialize};

/// A quantity of treasury value, distinct from points
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Amount(pub u128);

impl Amount {
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
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// The held donation balance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Treasury {
    /// Value received and not yet withdrawn
    pub balance: Amount,
}

impl Treasury {
    /// Create an empty treasury
    pub fn new() -> Self {
        Self {
            balance: Amount::zero(),
        }
    }

    /// Accept inbound value
    ///
    /// Never rejects; an addition that would wrap aborts.
    pub fn receive(&mut self, amount: Amount) {
        self.balance = match self.balance.checked_add(amount) {
            Some(balance) => balance,
            None => panic!("treasury balance overflowed receiving {}", amount),
        };
    }

    /// Take the entire balance, leaving zero behind
    ///
    /// The balance is zeroed before the caller gets to move the value
    /// anywhere, so a nested observer always sees an empty treasury.
    pub fn drain(&mut self) -> Amount {
        let amount = self.balance;
        self.balance = Amount::zero();
        amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receive_accumulates() {
        let mut treasury = Treasury::new();
        treasury.receive(Amount::new(1_000));
        treasury.receive(Amount::new(250));
        treasury.receive(Amount::zero()); // Zero-value donations are accepted

        assert_eq!(treasury.balance, Amount::new(1_250));
    }

    #[test]
    fn test_drain_takes_everything() {
        let mut treasury = Treasury::new();
        treasury.receive(Amount::new(777));

        assert_eq!(treasury.drain(), Amount::new(777));
        assert_eq!(treasury.balance, Amount::zero());
        assert_eq!(treasury.drain(), Amount::zero());
    }

    #[test]
    #[should_panic(expected = "treasury balance overflowed")]
    fn test_receive_overflow_aborts() {
        let mut treasury = Treasury::new();
        treasury.receive(Amount::new(u128::MAX));
        treasury.receive(Amount::new(1));
    }
}
