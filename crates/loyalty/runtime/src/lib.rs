//! Loyalty Program Runtime
//!
//! The execution engine over the domain types: every externally exposed
//! operation lives on [`LoyaltyProgram`], which validates the caller,
//! mutates state, and records one journal receipt per mutation.
//!
//! The single concurrency hazard in the system is reentrant invocation
//! during treasury withdrawal: delivering value through a
//! [`PayoutOutlet`] hands control to recipient code that may call back
//! into the engine before the withdrawal returns. See the `payout`
//! module for the trait and `program` for the guard.

#![deny(unsafe_code)]

pub mod payout;
pub mod program;

pub use payout::PayoutOutlet;
pub use program::{LoyaltyProgram, ProgramConfig};
