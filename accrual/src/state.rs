//! Program-wide and per-account ledger records.

use harvest_types::{AssetId, ParticipantId, Timestamp};
use serde::{Deserialize, Serialize};

/// The single program-wide record describing a staking program.
///
/// Created once when the program is initialised; the asset pair and window
/// are filled in by bootstrap and immutable afterwards. Every mutating
/// operation reads and writes this record as one indivisible step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgramState {
    /// The designated administrator — the only identity allowed to
    /// bootstrap the program and deposit rewards.
    pub admin: ParticipantId,

    /// The program's own asset-holding identity. Counterparty of every
    /// value transfer the ledger performs.
    pub ledger_account: ParticipantId,

    /// Asset participants deposit. `AssetId::NATIVE` until bootstrap.
    pub stake_asset: AssetId,

    /// Asset paid out as reward. May equal `stake_asset`.
    pub reward_asset: AssetId,

    /// Reward raw units accrued per second per staked unit.
    pub reward_rate: u128,

    /// Reward units deposited but not yet earned by any account.
    pub total_reward_pool: u128,

    /// Sum of all accounts' stake.
    pub total_staked: u128,

    /// Accrual window start. Set once at bootstrap.
    pub start_time: Timestamp,

    /// Accrual window end. Set once at bootstrap; `start_time < end_time`.
    pub end_time: Timestamp,

    /// When any account last ran a settlement.
    pub last_update_time: Timestamp,
}

impl ProgramState {
    /// A freshly initialised program: assets unset, window empty, counters zero.
    pub fn new(admin: ParticipantId, ledger_account: ParticipantId) -> Self {
        Self {
            admin,
            ledger_account,
            stake_asset: AssetId::NATIVE,
            reward_asset: AssetId::NATIVE,
            reward_rate: 0,
            total_reward_pool: 0,
            total_staked: 0,
            start_time: Timestamp::EPOCH,
            end_time: Timestamp::EPOCH,
            last_update_time: Timestamp::EPOCH,
        }
    }

    /// Whether bootstrap has configured the asset pair and window.
    pub fn is_bootstrapped(&self) -> bool {
        !self.stake_asset.is_native()
    }
}

/// Per-participant ledger record.
///
/// Created zero-valued on registration and never deleted — a participant
/// who fully unstakes keeps a zero record. Mutated only by settlement and
/// by the staking operations.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AccountState {
    /// Amount currently staked by this account.
    pub stake: u128,

    /// Accrued reward not yet claimed.
    pub pending_reward: u128,

    /// When this account last ran a settlement. `Timestamp::EPOCH` before
    /// the first one.
    pub last_update_time: Timestamp,
}

impl AccountState {
    pub fn new() -> Self {
        Self {
            stake: 0,
            pending_reward: 0,
            last_update_time: Timestamp::EPOCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (ParticipantId, ParticipantId) {
        (ParticipantId::new("admin"), ParticipantId::new("program"))
    }

    #[test]
    fn fresh_program_is_not_bootstrapped() {
        let (admin, program) = ids();
        let state = ProgramState::new(admin, program);
        assert!(!state.is_bootstrapped());
        assert_eq!(state.total_staked, 0);
        assert_eq!(state.total_reward_pool, 0);
        assert_eq!(state.start_time, Timestamp::EPOCH);
    }

    #[test]
    fn fresh_account_is_zeroed() {
        let account = AccountState::new();
        assert_eq!(account.stake, 0);
        assert_eq!(account.pending_reward, 0);
        assert_eq!(account.last_update_time, Timestamp::EPOCH);
    }
}
