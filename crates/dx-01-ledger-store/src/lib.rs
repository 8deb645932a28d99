//! # Ledger Store (dx-01)
//!
//! Thin boundary over the ordered key-value ledger that owns every durable
//! byte in the system. Contracts never talk to a concrete ledger; they use
//! the [`LedgerStore`] port, which exposes exactly the five calls the
//! hosting ledger offers:
//!
//! | Call | Semantics |
//! |------|-----------|
//! | `get_state(key)` | Current value or `None` |
//! | `put_state(key, bytes)` | Full-value replace |
//! | `del_state(key)` | Hard delete |
//! | `get_state_by_range(start, end)` | Lexicographic `[start, end)`, empty bounds are open |
//! | `get_query_result(selector)` | JSON field-equality predicate query |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): key-range helpers, selector evaluation,
//!   state digest, errors. No I/O.
//! - **Ports Layer** (`ports/`): the [`LedgerStore`] SPI.
//! - **Adapters Layer** (`adapters/`): [`InMemoryLedger`] for tests and
//!   embedding, [`FileBackedLedger`] for the local runtime.
//!
//! ## Determinism
//!
//! Both adapters keep keys in a `BTreeMap`, so range scans and query results
//! come back in byte order of the key. [`state_digest`] hashes that ordered
//! view, which lets callers verify that two executions of the same
//! invocations produced byte-identical ledgers.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{FileBackedLedger, InMemoryLedger};
pub use domain::{
    namespace_range, state_digest, state_digest_hex, LedgerError, Selector,
};
pub use ports::{KeyValue, LedgerStore};
