//! # Adapters Layer
//!
//! Concrete [`LedgerStore`](crate::ports::LedgerStore) implementations.

pub mod file;
pub mod memory;

pub use file::FileBackedLedger;
pub use memory::InMemoryLedger;
