//! Asset-movement seam.

use harvest_types::{AssetId, ParticipantId};
use thiserror::Error;

/// External collaborator that moves asset value between participants.
///
/// The ledger calls this for every value transfer it performs: bootstrap
/// funding, reward deposits, stake deposits and withdrawals, and reward
/// payouts. A zero-amount transfer registers the recipient for the asset
/// (the opt-in step bootstrap performs for the program's own account).
///
/// Implementations must be atomic per call: either the full amount moves
/// or an error is returned and nothing moved.
pub trait AssetTransfer {
    fn transfer(
        &self,
        asset: AssetId,
        from: &ParticipantId,
        to: &ParticipantId,
        amount: u128,
    ) -> Result<(), TransferError>;
}

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("insufficient {asset} balance: need {needed}, available {available}")]
    InsufficientBalance {
        asset: AssetId,
        needed: u128,
        available: u128,
    },

    #[error("transfer rejected: {0}")]
    Rejected(String),
}
