//! Asset identifiers.
//!
//! An `AssetId` is an opaque numeric handle assigned by the environment
//! that executes transfers. Id zero is the native funding unit and doubles
//! as the "unset" sentinel on a program that has not been bootstrapped;
//! stakeable and reward assets always carry nonzero ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a transferable asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId(u64);

impl AssetId {
    /// The native unit used for bootstrap funding. Never a stake or reward asset.
    pub const NATIVE: Self = Self(0);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn is_native(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_is_zero() {
        assert!(AssetId::NATIVE.is_native());
        assert!(!AssetId::new(7).is_native());
        assert_eq!(AssetId::new(7).raw(), 7);
    }
}
