//! Nullable asset transfers — an in-memory balance book for testing.

use harvest_ledger::{AssetTransfer, TransferError};
use harvest_types::{AssetId, ParticipantId};
use std::collections::HashMap;
use std::sync::Mutex;

/// One executed transfer, as recorded by [`NullTransfer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRecord {
    pub asset: AssetId,
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: u128,
}

/// An in-memory `AssetTransfer` implementation.
///
/// Keeps a balance book per (asset, participant), fails transfers the
/// sender cannot cover, treats zero-amount transfers as registrations, and
/// records every call for assertions.
pub struct NullTransfer {
    balances: Mutex<HashMap<(AssetId, String), u128>>,
    records: Mutex<Vec<TransferRecord>>,
    registrations: Mutex<Vec<(AssetId, ParticipantId)>>,
}

impl NullTransfer {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            records: Mutex::new(Vec::new()),
            registrations: Mutex::new(Vec::new()),
        }
    }

    /// Seed a participant's balance of an asset.
    pub fn set_balance(&self, asset: AssetId, id: &ParticipantId, amount: u128) {
        self.balances
            .lock()
            .unwrap()
            .insert((asset, id.as_str().to_string()), amount);
    }

    pub fn balance_of(&self, asset: AssetId, id: &ParticipantId) -> u128 {
        self.balances
            .lock()
            .unwrap()
            .get(&(asset, id.as_str().to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Every value transfer executed so far, in order.
    pub fn records(&self) -> Vec<TransferRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Every zero-amount registration executed so far, in order.
    pub fn registrations(&self) -> Vec<(AssetId, ParticipantId)> {
        self.registrations.lock().unwrap().clone()
    }
}

impl Default for NullTransfer {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetTransfer for NullTransfer {
    fn transfer(
        &self,
        asset: AssetId,
        from: &ParticipantId,
        to: &ParticipantId,
        amount: u128,
    ) -> Result<(), TransferError> {
        if amount == 0 {
            self.registrations.lock().unwrap().push((asset, to.clone()));
            return Ok(());
        }

        let mut balances = self.balances.lock().unwrap();
        let from_key = (asset, from.as_str().to_string());
        let available = balances.get(&from_key).copied().unwrap_or(0);
        if available < amount {
            return Err(TransferError::InsufficientBalance {
                asset,
                needed: amount,
                available,
            });
        }
        balances.insert(from_key, available - amount);
        let to_key = (asset, to.as_str().to_string());
        let to_balance = balances.get(&to_key).copied().unwrap_or(0);
        balances.insert(to_key, to_balance + amount);
        drop(balances);

        self.records.lock().unwrap().push(TransferRecord {
            asset,
            from: from.clone(),
            to: to.clone(),
            amount,
        });
        Ok(())
    }
}
