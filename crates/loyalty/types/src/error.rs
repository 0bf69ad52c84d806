//! Error types for the loyalty program

use crate::{ActorId, RewardKind};

/// Errors that can occur in loyalty program operations
///
/// Caller-correctable precondition failures and the ownership check are
/// structured variants. Environment failures around the treasury (no
/// funds, a rejected external transfer, a reentrant call) travel as
/// plain descriptive text in `Treasury`, since they originate outside
/// the ledger's own logic. Internal bookkeeping violations are not here
/// at all: those abort.
#[derive(Debug, thiserror::Error)]
pub enum LoyaltyError {
    #[error("Not the program owner: {0}")]
    NotOwner(ActorId),

    #[error("Not a member: {0}")]
    NotMember(ActorId),

    #[error("Already a member: {0}")]
    AlreadyMember(ActorId),

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Invalid address: the nil identity is not a valid target")]
    InvalidAddress,

    #[error("Cannot transfer points to yourself")]
    TransferToSelf,

    #[error("Insufficient points: have {have}, need {need}")]
    InsufficientPoints { have: u128, need: u128 },

    #[error("Invalid reward: {0} is not available")]
    InvalidReward(RewardKind),

    #[error("Treasury error: {0}")]
    Treasury(String),
}

/// Result type alias for loyalty program operations
pub type LoyaltyResult<T> = Result<T, LoyaltyError>;
