//! Settlement-specific errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccrualError {
    #[error("arithmetic overflow in reward computation")]
    Overflow,
}
