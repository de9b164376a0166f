//! Staking-reward ledger.
//!
//! One program, many participants: participants deposit a stake asset,
//! accrue a reward asset at the program's rate over a bounded window, and
//! may withdraw stake or claim rewards at will. Every mutating operation
//! settles the caller's accrued reward first (see `harvest-accrual`), then
//! applies its own effect.
//!
//! Operations are strictly sequential — the ledger is `&mut self` all the
//! way down and each operation either commits in full or leaves no trace.
//! Value movement goes through the `AssetTransfer` seam; time arrives as an
//! explicit `now` argument from the submitter.

pub mod error;
pub mod ledger;
pub mod transfer;

pub use error::{ErrorKind, LedgerError};
pub use ledger::{LedgerSummary, RewardLedger, REGISTRATION_RESERVE};
pub use transfer::{AssetTransfer, TransferError};
