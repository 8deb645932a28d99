//! # Domain Errors
//!
//! Failures raised by the ledger boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Keys must be non-empty.
    #[error("Invalid key: {reason}")]
    InvalidKey { reason: &'static str },

    /// Values must be non-empty; use `del_state` to remove a key.
    #[error("Empty value for key {key}")]
    EmptyValue { key: String },

    /// Selector document could not be understood.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Backing storage failed.
    #[error("Ledger I/O error: {message}")]
    Io { message: String },

    /// Backing storage holds bytes that cannot be decoded.
    #[error("Ledger corruption: {message}")]
    Corruption { message: String },
}
