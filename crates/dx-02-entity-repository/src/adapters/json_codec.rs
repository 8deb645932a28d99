use crate::domain::{Entity, RepositoryError};
use crate::ports::EntityCodec;

/// Default codec: compact JSON, fields in struct declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl EntityCodec for JsonCodec {
    fn encode<E: Entity>(&self, entity: &E) -> Result<Vec<u8>, RepositoryError> {
        serde_json::to_vec(entity).map_err(|e| RepositoryError::Encode {
            entity: E::NAMESPACE.entity_name(),
            id: entity.id().to_string(),
            message: e.to_string(),
        })
    }

    fn decode<E: Entity>(&self, key: &str, bytes: &[u8]) -> Result<E, RepositoryError> {
        serde_json::from_slice(bytes).map_err(|e| RepositoryError::Decode {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}
