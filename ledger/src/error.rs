//! Ledger operation errors.
//!
//! Every failure is a precondition violation detected before any state is
//! committed. `LedgerError::kind` folds the specific variants into the four
//! caller-facing categories.

use crate::transfer::TransferError;
use harvest_accrual::AccrualError;
use harvest_store::StoreError;
use harvest_types::{AssetId, ParticipantId, Timestamp};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("operation restricted to the program administrator")]
    NotAdmin,

    #[error("program assets are already configured")]
    AlreadyBootstrapped,

    #[error("program has not been bootstrapped")]
    NotBootstrapped,

    #[error("account already registered: {0}")]
    AlreadyRegistered(ParticipantId),

    #[error("account not registered: {0}")]
    AccountNotRegistered(ParticipantId),

    #[error("{given} does not match the configured {expected}")]
    AssetMismatch { given: AssetId, expected: AssetId },

    #[error("insufficient stake: need {needed}, available {available}")]
    InsufficientStake { needed: u128, available: u128 },

    #[error("no pending reward to claim")]
    NothingPending,

    #[error("amount must be positive")]
    ZeroAmount,

    #[error("invalid program window: start {start} must precede end {end}")]
    InvalidWindow { start: Timestamp, end: Timestamp },

    #[error("program window must start in the future: start {start}, now {now}")]
    WindowNotFuture { start: Timestamp, now: Timestamp },

    #[error("reward rate must be positive")]
    InvalidRate,

    #[error("{0} cannot be staked or paid as reward")]
    InvalidAsset(AssetId),

    #[error("funding {provided} below required registration reserve {required}")]
    BelowReserve { provided: u128, required: u128 },

    #[error("arithmetic overflow")]
    Overflow,

    #[error("transfer error: {0}")]
    Transfer(#[from] TransferError),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl From<AccrualError> for LedgerError {
    fn from(e: AccrualError) -> Self {
        match e {
            AccrualError::Overflow => Self::Overflow,
        }
    }
}

/// Caller-facing failure category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Administrator-only operation invoked by another caller.
    Authorization,
    /// Operation does not apply to the ledger's current state.
    InvalidState,
    /// The caller's balances cannot cover the operation.
    InsufficientFunds,
    /// A supplied argument is malformed.
    InvalidParameter,
    /// Storage or arithmetic fault.
    Internal,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAdmin => ErrorKind::Authorization,

            Self::AlreadyBootstrapped
            | Self::NotBootstrapped
            | Self::AlreadyRegistered(_)
            | Self::AccountNotRegistered(_)
            | Self::AssetMismatch { .. } => ErrorKind::InvalidState,

            Self::InsufficientStake { .. }
            | Self::NothingPending
            | Self::ZeroAmount
            | Self::Transfer(TransferError::InsufficientBalance { .. }) => {
                ErrorKind::InsufficientFunds
            }

            Self::InvalidWindow { .. }
            | Self::WindowNotFuture { .. }
            | Self::InvalidRate
            | Self::InvalidAsset(_)
            | Self::BelowReserve { .. } => ErrorKind::InvalidParameter,

            Self::Overflow | Self::Transfer(TransferError::Rejected(_)) | Self::Storage(_) => {
                ErrorKind::Internal
            }
        }
    }
}
