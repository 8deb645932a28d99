use crate::domain::{validate_key, LedgerError, Selector};
use crate::ports::{KeyValue, LedgerStore};
use std::collections::BTreeMap;
use std::ops::Bound;

/// In-memory ledger for tests and embedding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    data: BTreeMap<String, Vec<u8>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from existing entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<u8>)>) -> Self {
        Self {
            data: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Ordered view over every entry.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<u8>)> {
        self.data.iter()
    }
}

impl LedgerStore for InMemoryLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        validate_key(key)?;
        Ok(self.data.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        validate_key(key)?;
        if value.is_empty() {
            return Err(LedgerError::EmptyValue {
                key: key.to_string(),
            });
        }
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> Result<(), LedgerError> {
        validate_key(key)?;
        self.data.remove(key);
        Ok(())
    }

    fn get_state_by_range(&self, start: &str, end: &str) -> Result<Vec<KeyValue>, LedgerError> {
        if !start.is_empty() && !end.is_empty() && start >= end {
            return Ok(Vec::new());
        }
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start)
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end)
        };
        Ok(self
            .data
            .range::<str, _>((lower, upper))
            .map(|(k, v)| KeyValue::new(k.clone(), v.clone()))
            .collect())
    }

    fn get_query_result(&self, selector: &Selector) -> Result<Vec<KeyValue>, LedgerError> {
        Ok(self
            .data
            .iter()
            .filter(|(_, v)| selector.matches_bytes(v))
            .map(|(k, v)| KeyValue::new(k.clone(), v.clone()))
            .collect())
    }
}
