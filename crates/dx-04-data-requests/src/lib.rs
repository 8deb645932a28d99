//! # Data Requests (dx-04)
//!
//! Lifecycle of the data request record: creation, guarded updates of its
//! approval claims, lookup and listing.
//!
//! ## Operations
//!
//! | Operation | Failure codes |
//! |-----------|---------------|
//! | `create` | `ALREADY_EXISTS`, `INVALID_ATTRIBUTE`, `UNAUTHORIZED` |
//! | `read` | `NOT_FOUND` |
//! | `find_by_campaign` | `NOT_FOUND` when nothing live matches |
//! | `update` | `NOT_FOUND`, `INVALID_ATTRIBUTE`, `UNAUTHORIZED` |
//! | `delete` | `NOT_FOUND` |
//! | `list_all` | none (empty result allowed) |
//! | `exists` | none |
//! | `attribute_statuses` | `NOT_FOUND` |
//!
//! ## Write Path
//!
//! ```text
//! existence check ──► parse claims ──► reference check ──► ApprovalGuard ──► put_state
//! ```
//!
//! Every check runs before the single ledger write. A rejected invocation
//! leaves the ledger untouched.
//!
//! ## Approval Status
//!
//! Each requested attribute code is `pending` until a claim names it. The
//! last claim naming a code decides its effective status; see
//! [`AttributeStatusSummary`].

pub mod application;
pub mod domain;
pub mod ports;

pub use application::DataRequestService;
pub use domain::{
    AttributeState, AttributeStatusSummary, DataRequest, DataRequestDraft, DATA_REQUEST_NAMESPACE,
};
pub use ports::DataRequestApi;
