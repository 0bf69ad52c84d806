//! Loyalty Program Domain Types
//!
//! This crate defines the domain types for the loyalty points ledger:
//! membership records, point quantities and global counters, the reward
//! catalog, the donation treasury, the notification journal, and the
//! error taxonomy.
//!
//! # Key Concepts
//!
//! - **Member**: an identity that has joined the program. Membership is
//!   permanent; records are created once and never removed.
//! - **Points**: the per-member unit of account. Points enter the ledger
//!   only through issuance, leave only through redemption, and are
//!   conserved by transfers.
//! - **Reward catalog**: a closed set of reward kinds priced in points.
//!   A cost of zero is the sentinel for "not currently available".
//! - **Treasury**: the value balance funded by donations and drained by
//!   owner withdrawal.
//! - **Event journal**: receipt-based notification sink. The engine
//!   writes one receipt per mutation and never reads them back.
//!
//! # Architecture
//!
//! This is a pure types crate with no runtime dependencies. All types
//! implement `Clone`, `Debug`, `Serialize`, `Deserialize`. IDs use the
//! newtype pattern and implement `Display`, `generate()`, and `new()`.

#![deny(unsafe_code)]

mod actor;
mod error;
mod event;
mod member;
mod points;
mod reward;
mod treasury;

pub use actor::*;
pub use error::*;
pub use event::*;
pub use member::*;
pub use points::*;
pub use reward::*;
pub use treasury::*;
