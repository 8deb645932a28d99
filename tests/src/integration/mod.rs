//! Cross-crate integration tests.

pub mod approval_flow;
pub mod namespaces;
pub mod replay;
