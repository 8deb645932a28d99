//! # Shared Types Crate
//!
//! This crate contains the types every contract crate agrees on: the
//! attribute approval claim, the recognized approval status domain, the
//! invocation context handed to each contract call and the error taxonomy
//! reported back to clients.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Claim and error types are defined here once.
//! - **Replayable Context**: Every value a contract may depend on (caller,
//!   transaction id, transaction timestamp) travels in [`InvocationContext`];
//!   no contract reads the wall clock.
//! - **Machine-Readable Failures**: [`ContractError`] always carries an
//!   [`ErrorCode`] next to its human-readable message.

pub mod context;
pub mod entities;
pub mod errors;

pub use context::*;
pub use entities::*;
pub use errors::*;
