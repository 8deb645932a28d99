//! # Domain Errors

use dx_01_ledger_store::LedgerError;
use shared_types::{ContractError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{entity} {id} already exists")]
    AlreadyExists { entity: &'static str, id: String },

    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: String },

    /// The id still carries the namespace prefix after prefixing is undone,
    /// so the stored id would address a different key.
    #[error("Invalid {entity} id {id}: must not repeat the {prefix} prefix")]
    InvalidId {
        entity: &'static str,
        id: String,
        prefix: &'static str,
    },

    #[error("Cannot encode {entity} {id}: {message}")]
    Encode {
        entity: &'static str,
        id: String,
        message: String,
    },

    #[error("Cannot decode record at {key}: {message}")]
    Decode { key: String, message: String },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl RepositoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RepositoryError::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            RepositoryError::NotFound { .. } => ErrorCode::NotFound,
            RepositoryError::InvalidId { .. } => ErrorCode::InvalidArgument,
            RepositoryError::Encode { .. } | RepositoryError::Decode { .. } => {
                ErrorCode::SerializationError
            }
            RepositoryError::Ledger(LedgerError::InvalidSelector(_)) => ErrorCode::InvalidArgument,
            RepositoryError::Ledger(_) => ErrorCode::LedgerError,
        }
    }
}

impl From<RepositoryError> for ContractError {
    fn from(err: RepositoryError) -> Self {
        ContractError::new(err.code(), err.to_string())
    }
}
