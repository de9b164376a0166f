//! The reward ledger — program bootstrap, funding, staking, and claims.

use crate::error::LedgerError;
use crate::transfer::AssetTransfer;
use harvest_accrual::{pending_at, settle, AccountState, ProgramState, Settlement};
use harvest_store::{LedgerStore, StoreError};
use harvest_types::{AssetId, ParticipantId, Timestamp};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Native units the environment reserves per asset registration.
/// Bootstrap funding must cover one reserve per distinct program asset.
pub const REGISTRATION_RESERVE: u128 = 100_000;

/// The staking-reward ledger.
///
/// Holds the single program record plus one account record per registered
/// participant. Operations run strictly one at a time; each validates its
/// preconditions, settles accrued reward on working copies, performs the
/// external transfer, and only then commits — a failed operation leaves no
/// observable state change.
pub struct RewardLedger<T: AssetTransfer> {
    program: ProgramState,
    accounts: HashMap<ParticipantId, AccountState>,
    transfer: T,
}

/// Point-in-time totals for the ledger.
#[derive(Clone, Debug)]
pub struct LedgerSummary {
    pub accounts: u64,
    pub total_staked: u128,
    pub total_reward_pool: u128,
    pub reward_rate: u128,
}

impl<T: AssetTransfer> RewardLedger<T> {
    /// Create a fresh, un-bootstrapped ledger.
    ///
    /// `admin` is the only identity allowed to bootstrap and fund;
    /// `ledger_account` is the identity holding the program's assets.
    pub fn new(admin: ParticipantId, ledger_account: ParticipantId, transfer: T) -> Self {
        Self {
            program: ProgramState::new(admin, ledger_account),
            accounts: HashMap::new(),
            transfer,
        }
    }

    /// Configure the program: asset pair, accrual window, and the native
    /// funding that covers the per-asset registration reserves.
    ///
    /// The window is caller-supplied and must start strictly in the future;
    /// it is immutable once set. Registers the program's own account for
    /// each distinct asset via a zero-amount transfer.
    pub fn bootstrap(
        &mut self,
        caller: &ParticipantId,
        stake_asset: AssetId,
        reward_asset: AssetId,
        start_time: Timestamp,
        end_time: Timestamp,
        funding: u128,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        if *caller != self.program.admin {
            return Err(LedgerError::NotAdmin);
        }
        if self.program.is_bootstrapped() {
            return Err(LedgerError::AlreadyBootstrapped);
        }
        if stake_asset.is_native() {
            return Err(LedgerError::InvalidAsset(stake_asset));
        }
        if reward_asset.is_native() {
            return Err(LedgerError::InvalidAsset(reward_asset));
        }
        if start_time >= end_time {
            return Err(LedgerError::InvalidWindow {
                start: start_time,
                end: end_time,
            });
        }
        if start_time <= now {
            return Err(LedgerError::WindowNotFuture {
                start: start_time,
                now,
            });
        }
        let required = if stake_asset == reward_asset {
            REGISTRATION_RESERVE
        } else {
            2 * REGISTRATION_RESERVE
        };
        if funding < required {
            return Err(LedgerError::BelowReserve {
                provided: funding,
                required,
            });
        }

        let ledger_account = self.program.ledger_account.clone();
        self.transfer
            .transfer(AssetId::NATIVE, caller, &ledger_account, funding)?;
        self.transfer
            .transfer(stake_asset, &ledger_account, &ledger_account, 0)?;
        if reward_asset != stake_asset {
            self.transfer
                .transfer(reward_asset, &ledger_account, &ledger_account, 0)?;
        }

        self.program.stake_asset = stake_asset;
        self.program.reward_asset = reward_asset;
        self.program.start_time = start_time;
        self.program.end_time = end_time;

        info!(
            %stake_asset,
            %reward_asset,
            start = %start_time,
            end = %end_time,
            "program bootstrapped"
        );
        Ok(())
    }

    /// Deposit reward funding and set the accrual rate.
    ///
    /// Settles the caller's own account first if it is registered, then
    /// grows the pool and replaces the rate. The new rate applies to every
    /// account's entire unsettled interval — accounts that have not settled
    /// since before the change are re-priced wholesale, not time-sliced at
    /// the change boundary.
    ///
    /// Returns the new pool total.
    pub fn add_rewards(
        &mut self,
        caller: &ParticipantId,
        amount: u128,
        rate: u128,
        now: Timestamp,
    ) -> Result<u128, LedgerError> {
        if *caller != self.program.admin {
            return Err(LedgerError::NotAdmin);
        }
        self.ensure_bootstrapped()?;
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        if rate == 0 {
            return Err(LedgerError::InvalidRate);
        }

        let mut program = self.program.clone();
        let mut admin_account = self.accounts.get(caller).cloned();
        if let Some(account) = admin_account.as_mut() {
            let outcome = settle(&mut program, account, now)?;
            log_settlement(caller, &outcome);
        }

        self.transfer
            .transfer(program.reward_asset, caller, &program.ledger_account, amount)?;

        program.total_reward_pool = program
            .total_reward_pool
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        program.reward_rate = rate;
        let pool = program.total_reward_pool;

        self.program = program;
        if let Some(account) = admin_account {
            self.accounts.insert(caller.clone(), account);
        }

        info!(amount, rate, pool, "reward pool funded");
        Ok(pool)
    }

    /// Deposit stake. Settles first, then moves the stake asset in and
    /// grows both counters. Returns the account's new stake.
    pub fn add_stake(
        &mut self,
        caller: &ParticipantId,
        amount: u128,
        now: Timestamp,
    ) -> Result<u128, LedgerError> {
        self.ensure_bootstrapped()?;
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let mut account = self.registered_account(caller)?;
        let mut program = self.program.clone();

        let outcome = settle(&mut program, &mut account, now)?;
        log_settlement(caller, &outcome);

        self.transfer
            .transfer(program.stake_asset, caller, &program.ledger_account, amount)?;

        program.total_staked = program
            .total_staked
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        account.stake = account
            .stake
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let new_stake = account.stake;

        self.commit(caller, program, account);
        debug!(account = %caller, amount, new_stake, "stake added");
        Ok(new_stake)
    }

    /// Withdraw stake. Settles first, so withdrawn stake keeps the reward
    /// it already earned. Returns the account's new stake (possibly zero).
    pub fn remove_stake(
        &mut self,
        caller: &ParticipantId,
        asset: AssetId,
        amount: u128,
        now: Timestamp,
    ) -> Result<u128, LedgerError> {
        self.ensure_bootstrapped()?;
        if asset != self.program.stake_asset {
            return Err(LedgerError::AssetMismatch {
                given: asset,
                expected: self.program.stake_asset,
            });
        }
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let mut account = self.registered_account(caller)?;
        if amount > account.stake {
            return Err(LedgerError::InsufficientStake {
                needed: amount,
                available: account.stake,
            });
        }
        let mut program = self.program.clone();

        let outcome = settle(&mut program, &mut account, now)?;
        log_settlement(caller, &outcome);

        self.transfer
            .transfer(program.stake_asset, &program.ledger_account, caller, amount)?;

        program.total_staked = program
            .total_staked
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;
        account.stake -= amount;
        let new_stake = account.stake;

        self.commit(caller, program, account);
        debug!(account = %caller, amount, new_stake, "stake removed");
        Ok(new_stake)
    }

    /// Pay out the caller's entire pending reward. Fails if, after
    /// settlement, nothing is pending. Returns the amount paid.
    pub fn claim_rewards(
        &mut self,
        caller: &ParticipantId,
        asset: AssetId,
        now: Timestamp,
    ) -> Result<u128, LedgerError> {
        self.ensure_bootstrapped()?;
        if asset != self.program.reward_asset {
            return Err(LedgerError::AssetMismatch {
                given: asset,
                expected: self.program.reward_asset,
            });
        }
        let mut account = self.registered_account(caller)?;
        let mut program = self.program.clone();

        let outcome = settle(&mut program, &mut account, now)?;
        log_settlement(caller, &outcome);

        if account.pending_reward == 0 {
            return Err(LedgerError::NothingPending);
        }
        let payout = account.pending_reward;

        self.transfer
            .transfer(program.reward_asset, &program.ledger_account, caller, payout)?;
        account.pending_reward = 0;

        self.commit(caller, program, account);
        info!(account = %caller, payout, "reward claimed");
        Ok(payout)
    }

    /// Create the zero-valued account record for a new participant.
    pub fn register_account(&mut self, caller: &ParticipantId) -> Result<(), LedgerError> {
        if self.accounts.contains_key(caller) {
            return Err(LedgerError::AlreadyRegistered(caller.clone()));
        }
        self.accounts.insert(caller.clone(), AccountState::new());
        debug!(account = %caller, "account registered");
        Ok(())
    }

    // ── Read-only queries ────────────────────────────────────────────────

    pub fn program(&self) -> &ProgramState {
        &self.program
    }

    /// The transfer collaborator this ledger moves value through.
    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    pub fn account(&self, id: &ParticipantId) -> Option<&AccountState> {
        self.accounts.get(id)
    }

    pub fn stake_of(&self, id: &ParticipantId) -> u128 {
        self.accounts.get(id).map(|a| a.stake).unwrap_or(0)
    }

    /// Pending reward the account would hold after settling at `now`,
    /// computed without mutating anything.
    pub fn pending_rewards(
        &self,
        id: &ParticipantId,
        now: Timestamp,
    ) -> Result<u128, LedgerError> {
        let account = self
            .accounts
            .get(id)
            .ok_or_else(|| LedgerError::AccountNotRegistered(id.clone()))?;
        Ok(pending_at(&self.program, account, now)?)
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            accounts: self.accounts.len() as u64,
            total_staked: self.program.total_staked,
            total_reward_pool: self.program.total_reward_pool,
            reward_rate: self.program.reward_rate,
        }
    }

    // ── Persistence ──────────────────────────────────────────────────────

    /// Persist the program record and every account record.
    pub fn save_to_store(&self, store: &dyn LedgerStore) -> Result<(), LedgerError> {
        let bytes = bincode::serialize(&self.program)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        store.put_program(&bytes)?;
        for (id, account) in &self.accounts {
            let bytes = bincode::serialize(account)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            store.put_account_state(id, &bytes)?;
        }
        Ok(())
    }

    /// Restore a ledger previously saved with [`save_to_store`].
    ///
    /// [`save_to_store`]: RewardLedger::save_to_store
    pub fn load_from_store(store: &dyn LedgerStore, transfer: T) -> Result<Self, LedgerError> {
        let bytes = store
            .get_program()?
            .ok_or_else(|| StoreError::NotFound("program record".into()))?;
        let program: ProgramState = bincode::deserialize(&bytes)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut accounts = HashMap::new();
        for (id, bytes) in store.iter_account_states()? {
            let account: AccountState = bincode::deserialize(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            accounts.insert(id, account);
        }
        Ok(Self {
            program,
            accounts,
            transfer,
        })
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn ensure_bootstrapped(&self) -> Result<(), LedgerError> {
        if self.program.is_bootstrapped() {
            Ok(())
        } else {
            Err(LedgerError::NotBootstrapped)
        }
    }

    fn registered_account(&self, id: &ParticipantId) -> Result<AccountState, LedgerError> {
        self.accounts
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::AccountNotRegistered(id.clone()))
    }

    fn commit(&mut self, caller: &ParticipantId, program: ProgramState, account: AccountState) {
        self.program = program;
        self.accounts.insert(caller.clone(), account);
    }
}

fn log_settlement(account: &ParticipantId, outcome: &Settlement) {
    if outcome.capped {
        warn!(
            account = %account,
            credited = outcome.credited,
            "reward pool exhausted, settlement capped"
        );
    } else if outcome.credited > 0 {
        debug!(account = %account, credited = outcome.credited, "settled accrued reward");
    }
}
