//! Participant identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a ledger participant.
///
/// The ledger treats this as an opaque, already-authenticated name supplied
/// by its environment. It is the key for per-account state and the
/// `from`/`to` argument of every asset transfer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
