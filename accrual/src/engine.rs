//! Core settlement computation.
//!
//! `settle` is the single entry point every mutating ledger operation calls
//! before applying its own effect. It is idempotent with respect to elapsed
//! time: a second call at the same `now` credits nothing, because the
//! account's `last_update_time` advances to `now` on the first call.

use crate::error::AccrualError;
use crate::state::{AccountState, ProgramState};
use harvest_types::Timestamp;

/// Outcome of one settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// Reward raw units moved from the pool into the account's pending balance.
    pub credited: u128,

    /// True when the pool held less than the account had earned and the
    /// credit was clamped to the remainder.
    pub capped: bool,
}

impl Settlement {
    /// A settlement that touched nothing.
    pub fn none() -> Self {
        Self {
            credited: 0,
            capped: false,
        }
    }
}

/// Settle the reward `account` has earned since its last settlement.
///
/// No-ops before the window opens and for accounts already settled past the
/// window's end. Otherwise credits `stake × rate × elapsed` (clamped to the
/// funded pool) and stamps both records with `now`.
pub fn settle(
    program: &mut ProgramState,
    account: &mut AccountState,
    now: Timestamp,
) -> Result<Settlement, AccrualError> {
    if now < program.start_time {
        return Ok(Settlement::none());
    }
    // Settled through the end of the window already; nothing left to earn.
    if account.last_update_time > program.end_time {
        return Ok(Settlement::none());
    }

    let effective_end = now.min(program.end_time);
    let effective_start = account.last_update_time.max(program.start_time);
    let elapsed = effective_end.secs_since(effective_start);

    let rate_per_unit = (elapsed as u128)
        .checked_mul(program.reward_rate)
        .ok_or(AccrualError::Overflow)?;
    let owed = account
        .stake
        .checked_mul(rate_per_unit)
        .ok_or(AccrualError::Overflow)?;

    // Never promise more than was funded: clamp to the remaining pool.
    let credited = owed.min(program.total_reward_pool);
    account.pending_reward = account
        .pending_reward
        .checked_add(credited)
        .ok_or(AccrualError::Overflow)?;
    program.total_reward_pool -= credited;

    account.last_update_time = now;
    program.last_update_time = now;

    Ok(Settlement {
        credited,
        capped: credited < owed,
    })
}

/// Preview the pending reward `account` would hold after settling at `now`,
/// without mutating either record.
pub fn pending_at(
    program: &ProgramState,
    account: &AccountState,
    now: Timestamp,
) -> Result<u128, AccrualError> {
    let mut program = program.clone();
    let mut account = account.clone();
    settle(&mut program, &mut account, now)?;
    Ok(account.pending_reward)
}
