//! # Ports Layer
//!
//! The single driven port every contract depends on.
//!
//! Production: the hosting ledger's stub.
//! Local runtime: [`FileBackedLedger`](crate::adapters::FileBackedLedger).
//! Testing: [`InMemoryLedger`](crate::adapters::InMemoryLedger).

use crate::domain::{LedgerError, Selector};

/// One entry yielded by a range scan or a predicate query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered key-value ledger.
///
/// Writes are visible to later reads of the same store immediately. Both
/// listing calls return entries in ascending key order.
pub trait LedgerStore: Send + Sync {
    /// Current value for `key`, or `None`.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Replace the whole value stored under `key`.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn del_state(&mut self, key: &str) -> Result<(), LedgerError>;

    /// All entries with `start <= key < end`. Empty bounds are open.
    fn get_state_by_range(&self, start: &str, end: &str) -> Result<Vec<KeyValue>, LedgerError>;

    /// All entries whose value is a JSON document matched by `selector`.
    /// Results span every namespace.
    fn get_query_result(&self, selector: &Selector) -> Result<Vec<KeyValue>, LedgerError>;
}
