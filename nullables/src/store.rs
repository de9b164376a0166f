//! Nullable store — thread-safe in-memory storage for testing.

use harvest_store::{LedgerStore, StoreError};
use harvest_types::ParticipantId;
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory ledger store for testing.
pub struct NullStore {
    program: Mutex<Option<Vec<u8>>>,
    accounts: Mutex<HashMap<String, Vec<u8>>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            program: Mutex::new(None),
            accounts: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for NullStore {
    fn get_program(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.program.lock().unwrap().clone())
    }

    fn put_program(&self, bytes: &[u8]) -> Result<(), StoreError> {
        *self.program.lock().unwrap() = Some(bytes.to_vec());
        Ok(())
    }

    fn get_account_state(&self, id: &ParticipantId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.accounts.lock().unwrap().get(id.as_str()).cloned())
    }

    fn put_account_state(&self, id: &ParticipantId, state: &[u8]) -> Result<(), StoreError> {
        self.accounts
            .lock()
            .unwrap()
            .insert(id.as_str().to_string(), state.to_vec());
        Ok(())
    }

    fn iter_account_states(&self) -> Result<Vec<(ParticipantId, Vec<u8>)>, StoreError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .map(|(id, bytes)| (ParticipantId::new(id.clone()), bytes.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_record_round_trips() {
        let store = NullStore::new();
        assert!(store.get_program().unwrap().is_none());
        store.put_program(b"program_data").unwrap();
        assert_eq!(store.get_program().unwrap().unwrap(), b"program_data");
    }

    #[test]
    fn account_records_round_trip() {
        let store = NullStore::new();
        let id = ParticipantId::new("alice");
        assert!(store.get_account_state(&id).unwrap().is_none());

        store.put_account_state(&id, b"account_data").unwrap();
        assert_eq!(
            store.get_account_state(&id).unwrap().unwrap(),
            b"account_data"
        );
        assert_eq!(store.account_count().unwrap(), 1);
    }
}
