//! # Application Layer

mod guard;

pub use guard::ApprovalGuard;
