//! # Ports Layer
//!
//! The codec seam. Codecs are stateless and injected into the repository,
//! so an entity type never carries its own (de)serializer.

use crate::domain::{Entity, RepositoryError};

/// Bytes <-> entity conversion for stored records.
///
/// Encoding must be deterministic: the same entity always yields the same
/// bytes, so replayed invocations leave byte-identical ledgers.
pub trait EntityCodec: Send + Sync {
    fn encode<E: Entity>(&self, entity: &E) -> Result<Vec<u8>, RepositoryError>;

    /// `key` is only used to label decode failures.
    fn decode<E: Entity>(&self, key: &str, bytes: &[u8]) -> Result<E, RepositoryError>;
}
