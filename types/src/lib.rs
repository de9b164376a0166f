//! Fundamental types for the Harvest staking ledger.
//!
//! This crate defines the small set of types shared by every other crate in
//! the workspace: timestamps, asset identifiers, and participant identities.

pub mod asset;
pub mod participant;
pub mod time;

pub use asset::AssetId;
pub use participant::ParticipantId;
pub use time::Timestamp;
