//! Abstract storage trait for the Harvest staking ledger.
//!
//! Any storage backend (embedded KV, SQL, in-memory for testing) implements
//! `LedgerStore`. The rest of the workspace depends only on the trait.

pub mod error;
pub mod ledger;

pub use error::StoreError;
pub use ledger::LedgerStore;
