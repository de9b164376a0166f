//! Reward settlement engine for the Harvest staking ledger.
//!
//! Rewards accrue lazily: nothing ticks in the background, and an account's
//! entitlement is computed and settled only when that account is touched.
//! For an account with stake `s`, settling at time `t` credits
//! `s × rate × elapsed`, where `elapsed` is the account's unsettled portion
//! of the program window `[start_time, end_time)`.
//!
//! Two properties of this formula are deliberate:
//! - The rate is a flat per-staked-unit multiplier. An account's accrual
//!   depends only on its own stake — there is no division by the global
//!   `total_staked`, so two accounts with equal stake earn equal reward no
//!   matter how many other stakers exist. Total emission therefore scales
//!   with the number of staked units; the funded pool is the only cap.
//! - Settlement never pays out more than the pool holds. When the pool
//!   runs dry the credit is silently clamped; the staker is under-rewarded,
//!   never blocked.

pub mod engine;
pub mod error;
pub mod state;

pub use engine::{pending_at, settle, Settlement};
pub use error::AccrualError;
pub use state::{AccountState, ProgramState};
