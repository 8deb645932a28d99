//! # Data Exchange Ledger Test Suite
//!
//! Unified test crate for behaviour that spans crates.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs          # Shared router, callers and invocation helpers
//! └── integration/
//!     ├── approval_flow.rs # Create / guarded update / read through the router
//!     ├── namespaces.rs    # Three contracts sharing one ledger
//!     └── replay.rs        # Byte-identical replay across ledgers and strategies
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dx-tests
//! cargo test -p dx-tests integration::replay
//! ```

#[cfg(test)]
pub mod fixtures;
pub mod integration;
