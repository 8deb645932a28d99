//! # Approval Authorization (dx-03)
//!
//! Decides whether a caller may assert the approval claims carried by a
//! data request write.
//!
//! ## Pipeline
//!
//! ```text
//! attributeStatusList text ──► parse_claims ──► Vec<AttributeStatus>
//!                                                     │
//! caller certificate ──► IdentityResolver ──► identity key
//!                                                     │
//!                        ApprovalGuard::authorize ◄───┘
//!                         (identity key ──► org table ──► compare orgId)
//! ```
//!
//! ## Rules
//!
//! | Claim status | Check |
//! |--------------|-------|
//! | `approved` (any case) | `claim.orgId` must equal the caller's org |
//! | anything else | none |
//!
//! One failing claim rejects the whole write. Unknown callers resolve to
//! [`UNKNOWN_IDENTITY`], which never owns an org, so every approval they
//! assert is denied.
//!
//! ## Lenient Parsing
//!
//! Text that does not match the claim notation is skipped, not rejected.
//! [`ParseOutcome::skipped`] keeps the dropped fragments so callers can log
//! them.

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::ApprovalGuard;
pub use config::AuthorizationConfig;
pub use domain::{
    check_attribute_references, parse_claims, render_claims, AuthorizationError,
    IdentityResolver, ParseOutcome, PeerIdentity, UNKNOWN_IDENTITY,
};
pub use ports::ApprovalAuthorizer;
