//! Property tests: any random sequence of ledger operations conserves
//! points and keeps the cumulative counters monotonic.
//!
//! Conservation means the sum of all member balances always equals
//! points issued minus points redeemed. Rejected operations count too:
//! a failed call must leave every total exactly where it was.

use loyalty_runtime::{LoyaltyProgram, ProgramConfig};
use loyalty_types::{ActorId, EventJournal, Points, RewardKind};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// One externally observable call against the program.
#[derive(Debug, Clone, Copy)]
enum LedgerOp {
    Join { who: usize },
    Earn { who: usize, amount: u64 },
    Transfer { from: usize, to: usize, amount: u64 },
    Grant { to: usize, amount: u64 },
    Redeem { who: usize, reward: usize },
}

/// Generate a random operation over a small cast of actors. Amounts
/// include zero so the rejection paths get exercised as well.
fn arb_op() -> impl Strategy<Value = LedgerOp> {
    prop_oneof![
        (0usize..4).prop_map(|who| LedgerOp::Join { who }),
        (0usize..4, 0u64..5_000).prop_map(|(who, amount)| LedgerOp::Earn { who, amount }),
        (0usize..4, 0usize..4, 0u64..5_000)
            .prop_map(|(from, to, amount)| LedgerOp::Transfer { from, to, amount }),
        (0usize..4, 0u64..5_000).prop_map(|(to, amount)| LedgerOp::Grant { to, amount }),
        (0usize..4, 0usize..3).prop_map(|(who, reward)| LedgerOp::Redeem { who, reward }),
    ]
}

fn cast() -> Vec<ActorId> {
    (0..4).map(|i| ActorId::new(format!("member-{}", i))).collect()
}

fn apply(
    program: &mut LoyaltyProgram,
    journal: &mut EventJournal,
    owner: &ActorId,
    actors: &[ActorId],
    op: LedgerOp,
) {
    match op {
        LedgerOp::Join { who } => {
            let _ = program.join(&actors[who], journal);
        }
        LedgerOp::Earn { who, amount } => {
            let _ = program.earn_points(&actors[who], Points::new(amount as u128), journal);
        }
        LedgerOp::Transfer { from, to, amount } => {
            let _ = program.transfer_points(
                &actors[from],
                &actors[to],
                Points::new(amount as u128),
                journal,
            );
        }
        LedgerOp::Grant { to, amount } => {
            let _ = program.grant_points(owner, &actors[to], Points::new(amount as u128), journal);
        }
        LedgerOp::Redeem { who, reward } => {
            let _ = program.redeem(&actors[who], RewardKind::all()[reward], journal);
        }
    }
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// After every operation, successful or rejected, the sum of member
    /// balances equals points issued minus points redeemed.
    #[test]
    fn balances_always_equal_issued_minus_redeemed(
        ops in prop::collection::vec(arb_op(), 1..60),
    ) {
        let owner = ActorId::new("owner");
        let mut program = LoyaltyProgram::new(owner.clone(), ProgramConfig::default());
        let mut journal = EventJournal::new();
        let actors = cast();

        for op in ops {
            apply(&mut program, &mut journal, &owner, &actors, op);

            let issued = program.total_points_issued();
            let redeemed = program.total_points_redeemed();
            prop_assert!(redeemed <= issued);
            prop_assert_eq!(program.total_member_points(), issued - redeemed);
        }
    }

    /// The cumulative counters only ever grow.
    #[test]
    fn counters_are_monotonic(
        ops in prop::collection::vec(arb_op(), 1..60),
    ) {
        let owner = ActorId::new("owner");
        let mut program = LoyaltyProgram::new(owner.clone(), ProgramConfig::default());
        let mut journal = EventJournal::new();
        let actors = cast();

        let mut last_issued = Points::zero();
        let mut last_redeemed = Points::zero();
        for op in ops {
            apply(&mut program, &mut journal, &owner, &actors, op);

            let issued = program.total_points_issued();
            let redeemed = program.total_points_redeemed();
            prop_assert!(issued >= last_issued);
            prop_assert!(redeemed >= last_redeemed);
            last_issued = issued;
            last_redeemed = redeemed;
        }
    }

    /// Once an identity joins, no later operation removes it from the roll.
    #[test]
    fn membership_is_permanent(
        ops in prop::collection::vec(arb_op(), 1..60),
    ) {
        let owner = ActorId::new("owner");
        let mut program = LoyaltyProgram::new(owner.clone(), ProgramConfig::default());
        let mut journal = EventJournal::new();
        let actors = cast();

        let mut joined: Vec<ActorId> = Vec::new();
        for op in ops {
            apply(&mut program, &mut journal, &owner, &actors, op);
            if let LedgerOp::Join { who } = op {
                joined.push(actors[who].clone());
            }

            for id in &joined {
                prop_assert!(program.is_member(id));
            }
            prop_assert!(program.member_count() <= actors.len());
        }
    }
}
