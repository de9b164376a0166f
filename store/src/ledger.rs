//! Persistence trait for ledger state.

use crate::StoreError;
use harvest_types::ParticipantId;

/// Store trait for persisting ledger state to durable storage.
///
/// Uses opaque `Vec<u8>` so the store doesn't depend on the core crate
/// (which would create a circular dependency). The ledger serializes and
/// deserializes its own records.
///
/// Persisted layout: exactly one program record, plus one account record
/// per registered participant. Account records are never deleted — a fully
/// unstaked participant keeps a zero-valued record.
pub trait LedgerStore {
    fn get_program(&self) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_program(&self, bytes: &[u8]) -> Result<(), StoreError>;

    fn get_account_state(&self, id: &ParticipantId) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_account_state(&self, id: &ParticipantId, state: &[u8]) -> Result<(), StoreError>;
    fn iter_account_states(&self) -> Result<Vec<(ParticipantId, Vec<u8>)>, StoreError>;

    fn account_count(&self) -> Result<u64, StoreError> {
        self.iter_account_states().map(|v| v.len() as u64)
    }
}
