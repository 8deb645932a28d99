//! # Domain Layer
//!
//! Pure ledger-side logic: key ranges, selector evaluation and the state
//! digest. This module contains NO I/O dependencies.

pub mod digest;
pub mod errors;
pub mod keys;
pub mod selector;

pub use digest::*;
pub use errors::*;
pub use keys::*;
pub use selector::*;
