use crate::domain::Namespace;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record type stored through [`EntityRepository`](crate::EntityRepository).
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Key namespace owned by this type.
    const NAMESPACE: Namespace;

    /// Bare identifier (no namespace prefix).
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Tombstone flag. Tombstoned records are excluded from listings.
    fn is_deleted(&self) -> bool {
        false
    }
}
