//! # Key Namespaces

use dx_01_ledger_store::namespace_range;

/// A key prefix reserving one slice of the ledger for one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Namespace {
    prefix: &'static str,
    entity_name: &'static str,
}

impl Namespace {
    pub const fn new(prefix: &'static str, entity_name: &'static str) -> Self {
        Self {
            prefix,
            entity_name,
        }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Human-readable type name used in error messages.
    pub fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    /// Ledger key for `id`. Already-prefixed ids are returned unchanged.
    pub fn key(&self, id: &str) -> String {
        if id.starts_with(self.prefix) {
            id.to_string()
        } else {
            format!("{}{}", self.prefix, id)
        }
    }

    /// Bare id for a key or id, with the prefix removed once.
    pub fn local_id<'a>(&self, key: &'a str) -> &'a str {
        key.strip_prefix(self.prefix).unwrap_or(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        key.starts_with(self.prefix)
    }

    /// Half-open range holding exactly the keys with this prefix.
    pub fn range(&self) -> (String, String) {
        namespace_range(self.prefix)
    }
}
