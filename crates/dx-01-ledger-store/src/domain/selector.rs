//! # Predicate Selectors
//!
//! The predicate-query language understood by the ledger:
//!
//! ```text
//! { "selector": { "<field>": <value> [, "<field>": <value> ...] } }
//! ```
//!
//! Every listed field must be present in the stored JSON document and equal
//! to the given value. Dotted field names (`"owner.org"`) address nested
//! objects. `{ "selector": {} }` matches every JSON document.

use crate::domain::LedgerError;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    fields: Map<String, Value>,
}

impl Selector {
    /// Selector matching every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a field-equality condition.
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Parse a `{"selector": {...}}` query document.
    pub fn parse(query: &str) -> Result<Self, LedgerError> {
        let document: Value = serde_json::from_str(query)
            .map_err(|e| LedgerError::InvalidSelector(e.to_string()))?;
        let Some(selector) = document.get("selector") else {
            return Err(LedgerError::InvalidSelector(
                "missing \"selector\" member".to_string(),
            ));
        };
        let Value::Object(fields) = selector else {
            return Err(LedgerError::InvalidSelector(
                "\"selector\" must be an object".to_string(),
            ));
        };
        Ok(Self {
            fields: fields.clone(),
        })
    }

    /// Render back to the query document form.
    pub fn to_query_string(&self) -> String {
        serde_json::json!({ "selector": self.fields }).to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Evaluate against one stored document.
    pub fn matches(&self, document: &Value) -> bool {
        if !document.is_object() {
            return false;
        }
        self.fields
            .iter()
            .all(|(field, expected)| lookup(document, field) == Some(expected))
    }

    /// Evaluate against raw stored bytes. Non-JSON values never match.
    pub fn matches_bytes(&self, bytes: &[u8]) -> bool {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(document) => self.matches(&document),
            Err(_) => false,
        }
    }
}

fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(direct) = document.get(path) {
        return Some(direct);
    }
    path.split('.')
        .try_fold(document, |current, segment| current.get(segment))
}
