//! # Ports Layer
//!
//! The inbound API the lifecycle contracts depend on.

use crate::domain::AuthorizationError;
use shared_types::{AttributeStatus, InvocationContext};

/// Authorization decision for approval claims.
pub trait ApprovalAuthorizer: Send + Sync {
    /// Canonical identity key of the caller.
    fn identity_of(&self, ctx: &InvocationContext) -> String;

    /// Org the caller may approve for, if any.
    fn caller_org(&self, ctx: &InvocationContext) -> Option<String>;

    /// Reject the whole claim set if any `approved` claim names an org other
    /// than the caller's.
    fn authorize(
        &self,
        ctx: &InvocationContext,
        claims: &[AttributeStatus],
    ) -> Result<(), AuthorizationError>;
}
