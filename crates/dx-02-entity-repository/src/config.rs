//! Repository configuration.

use serde::{Deserialize, Serialize};

/// How namespace listings are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStrategy {
    /// Lexicographic range scan over the namespace.
    #[default]
    RangeScan,
    /// Ledger predicate query, filtered to the namespace.
    PredicateQuery,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub list_strategy: ListStrategy,
}
