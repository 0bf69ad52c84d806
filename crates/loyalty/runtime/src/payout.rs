//! Pluggable outlet for external value transfer

use crate::program::LoyaltyProgram;
use loyalty_types::{ActorId, Amount, EventJournal, LoyaltyError};

/// Pluggable value-transfer outlet.
///
/// Implementations move withdrawn treasury value to a recipient over
/// whatever external rail the deployment uses. Delivery may transfer
/// control to untrusted recipient code, which is why the engine and
/// journal are passed back in: the recipient can legally re-invoke
/// engine operations before `deliver` returns, and the engine must
/// stay consistent when it does.
pub trait PayoutOutlet {
    /// Short name of the rail this outlet delivers over
    fn channel(&self) -> &'static str;

    /// Deliver `amount` to `to`, with the engine re-entrant underneath
    fn deliver(
        &self,
        program: &mut LoyaltyProgram,
        to: &ActorId,
        amount: Amount,
        journal: &mut EventJournal,
    ) -> Result<(), LoyaltyError>;
}
