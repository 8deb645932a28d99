//! # Error Types
//!
//! The failure taxonomy every contract reports to its caller. Failures are
//! invocation-terminating: a contract returns a [`ContractError`] before it
//! performs any ledger write, and nothing is retried internally.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Machine-readable failure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Create on a key that is already present.
    AlreadyExists,
    /// Read, update or delete on an absent key, or an empty filtered result.
    NotFound,
    /// An approval claim failed the authorization guard.
    Unauthorized,
    /// A claim names an attribute code the request never asked for.
    InvalidAttribute,
    /// The invocation itself is malformed (unknown function, bad argument).
    InvalidArgument,
    /// The ledger rejected a read or write.
    LedgerError,
    /// A stored record could not be encoded or decoded.
    SerializationError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::InvalidAttribute => "INVALID_ATTRIBUTE",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::LedgerError => "LEDGER_ERROR",
            ErrorCode::SerializationError => "SERIALIZATION_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed contract invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ContractError {
    pub code: ErrorCode,
    pub message: String,
}

impl ContractError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AlreadyExists, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    /// JSON payload handed back to clients.
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "code": self.code,
            "message": self.message,
        })
        .to_string()
    }
}
