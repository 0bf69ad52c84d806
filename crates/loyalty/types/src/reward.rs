//! Reward catalog: what points can be redeemed for
//!
//! The catalog prices a closed set of reward kinds in points. A cost of
//! exactly zero is the sentinel for "this reward is not currently
//! available", which keeps "unconfigured" distinct from "free": costs
//! can never be set to zero after construction.

use crate::{LoyaltyError, LoyaltyResult, Points};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The redeemable reward kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    /// Branded t-shirt
    Tshirt,
    /// VIP status
    Vip,
    /// Branded hoodie
    Hoodie,
}

impl RewardKind {
    /// Every reward kind, in declaration order
    pub fn all() -> [RewardKind; 3] {
        [RewardKind::Tshirt, RewardKind::Vip, RewardKind::Hoodie]
    }
}

impl std::fmt::Display for RewardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RewardKind::Tshirt => "tshirt",
            RewardKind::Vip => "vip",
            RewardKind::Hoodie => "hoodie",
        };
        write!(f, "{}", name)
    }
}

/// Point costs for each reward kind
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RewardCatalog {
    /// Cost per kind; a missing or zero entry means unavailable
    pub costs: HashMap<RewardKind, Points>,
}

impl RewardCatalog {
    /// Create a catalog with all three kinds priced
    pub fn new(tshirt: Points, vip: Points, hoodie: Points) -> Self {
        let mut costs = HashMap::new();
        costs.insert(RewardKind::Tshirt, tshirt);
        costs.insert(RewardKind::Vip, vip);
        costs.insert(RewardKind::Hoodie, hoodie);
        Self { costs }
    }

    /// Current cost of a reward kind (zero if unset)
    pub fn cost(&self, kind: RewardKind) -> Points {
        self.costs.get(&kind).copied().unwrap_or_else(Points::zero)
    }

    /// Whether a reward kind can currently be redeemed
    pub fn is_available(&self, kind: RewardKind) -> bool {
        !self.cost(kind).is_zero()
    }

    /// Overwrite the cost of a reward kind
    ///
    /// Zero is rejected to preserve the unavailability sentinel.
    pub fn set_cost(&mut self, kind: RewardKind, cost: Points) -> LoyaltyResult<()> {
        if cost.is_zero() {
            return Err(LoyaltyError::ZeroAmount);
        }
        self.costs.insert(kind, cost);
        Ok(())
    }
}
