//! # Domain Errors

use shared_types::{ContractError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// An `approved` claim names an org the caller does not belong to.
    #[error("Identity {identity} is not authorized to approve on behalf of org {org_id}")]
    Unauthorized { identity: String, org_id: String },

    /// A claim references an attribute code the request never asked for.
    #[error("Attribute {name} is not part of the requested attribute codes")]
    InvalidAttribute { name: String },

    /// Resolver peers or the org table are inconsistent.
    #[error("Invalid authorization config: {reason}")]
    InvalidConfig { reason: String },
}

impl From<AuthorizationError> for ContractError {
    fn from(err: AuthorizationError) -> Self {
        let code = match &err {
            AuthorizationError::Unauthorized { .. } => ErrorCode::Unauthorized,
            AuthorizationError::InvalidAttribute { .. } => ErrorCode::InvalidAttribute,
            AuthorizationError::InvalidConfig { .. } => ErrorCode::InvalidArgument,
        };
        ContractError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_names_org() {
        let err: ContractError = AuthorizationError::Unauthorized {
            identity: "org1-peer1".into(),
            org_id: "B".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert!(err.message.contains("org B"));
    }
}
