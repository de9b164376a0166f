//! Nullable infrastructure for deterministic testing.
//!
//! The ledger's external dependencies (time source, asset transfers,
//! persistence) are all seams. This crate provides test-friendly
//! implementations that return deterministic values, can be controlled
//! programmatically, and never touch the filesystem or network.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod store;
pub mod transfer;

pub use clock::NullClock;
pub use store::NullStore;
pub use transfer::{NullTransfer, TransferRecord};
