use crate::adapters::JsonCodec;
use crate::config::{ListStrategy, RepositoryConfig};
use crate::domain::{Entity, RepositoryError};
use crate::ports::EntityCodec;
use dx_01_ledger_store::{LedgerStore, Selector};
use std::marker::PhantomData;
use tracing::debug;

/// CRUD and listing for one entity type.
///
/// The repository holds no ledger state. Read operations borrow the store
/// immutably, writes mutably. Every write is a full-record replacement.
#[derive(Debug, Clone)]
pub struct EntityRepository<E, C = JsonCodec> {
    codec: C,
    strategy: ListStrategy,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityRepository<E, JsonCodec> {
    pub fn new(strategy: ListStrategy) -> Self {
        Self::with_codec(JsonCodec, strategy)
    }

    pub fn from_config(config: &RepositoryConfig) -> Self {
        Self::new(config.list_strategy)
    }
}

impl<E: Entity> Default for EntityRepository<E, JsonCodec> {
    fn default() -> Self {
        Self::new(ListStrategy::default())
    }
}

impl<E: Entity, C: EntityCodec> EntityRepository<E, C> {
    pub fn with_codec(codec: C, strategy: ListStrategy) -> Self {
        Self {
            codec,
            strategy,
            _entity: PhantomData,
        }
    }

    pub fn strategy(&self) -> ListStrategy {
        self.strategy
    }

    /// Ledger key for `id` (prefix applied once).
    pub fn key(&self, id: &str) -> String {
        E::NAMESPACE.key(id)
    }

    pub fn exists<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        id: &str,
    ) -> Result<bool, RepositoryError> {
        Ok(store.get_state(&self.key(id))?.is_some())
    }

    /// Store a new entity. Fails if anything, live or tombstoned, occupies
    /// the key.
    pub fn create<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        mut entity: E,
    ) -> Result<E, RepositoryError> {
        let (key, id) = self.resolve(entity.id())?;
        if store.get_state(&key)?.is_some() {
            return Err(self.already_exists(id));
        }
        entity.set_id(id);
        self.write(store, &key, &entity)?;
        Ok(entity)
    }

    pub fn read<S: LedgerStore + ?Sized>(&self, store: &S, id: &str) -> Result<E, RepositoryError> {
        let key = self.key(id);
        match store.get_state(&key)? {
            Some(bytes) => self.codec.decode(&key, &bytes),
            None => Err(self.not_found(E::NAMESPACE.local_id(&key).to_string())),
        }
    }

    /// Replace the entity stored under `id`. The stored id is always the one
    /// addressed, whatever `entity` carries.
    pub fn update<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        id: &str,
        mut entity: E,
    ) -> Result<E, RepositoryError> {
        let (key, id) = self.resolve(id)?;
        if store.get_state(&key)?.is_none() {
            return Err(self.not_found(id));
        }
        entity.set_id(id);
        self.write(store, &key, &entity)?;
        Ok(entity)
    }

    /// Hard delete.
    pub fn delete<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        id: &str,
    ) -> Result<(), RepositoryError> {
        let key = self.key(id);
        if store.get_state(&key)?.is_none() {
            return Err(self.not_found(E::NAMESPACE.local_id(&key).to_string()));
        }
        store.del_state(&key)?;
        debug!(key = %key, entity = E::NAMESPACE.entity_name(), "Deleted record");
        Ok(())
    }

    /// Every live entity in the namespace, in key order.
    pub fn list_all<S: LedgerStore + ?Sized>(&self, store: &S) -> Result<Vec<E>, RepositoryError> {
        self.find(store, &Selector::all())
    }

    /// Live entities in the namespace matched by `selector`, in key order.
    pub fn find<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        selector: &Selector,
    ) -> Result<Vec<E>, RepositoryError> {
        let records = match self.strategy {
            ListStrategy::RangeScan => self.scan_range(store, selector)?,
            ListStrategy::PredicateQuery => self.query(store, selector)?,
        };
        Ok(records.into_iter().filter(|e| !e.is_deleted()).collect())
    }

    fn scan_range<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        selector: &Selector,
    ) -> Result<Vec<E>, RepositoryError> {
        let (start, end) = E::NAMESPACE.range();
        store
            .get_state_by_range(&start, &end)?
            .into_iter()
            .filter(|kv| selector.matches_bytes(&kv.value))
            .map(|kv| self.codec.decode(&kv.key, &kv.value))
            .collect()
    }

    fn query<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        selector: &Selector,
    ) -> Result<Vec<E>, RepositoryError> {
        store
            .get_query_result(selector)?
            .into_iter()
            .filter(|kv| E::NAMESPACE.contains_key(&kv.key))
            .map(|kv| self.codec.decode(&kv.key, &kv.value))
            .collect()
    }

    /// Key and stored id for a write. The stored id must key back to the
    /// same record, so ids that repeat the prefix are refused.
    fn resolve(&self, id: &str) -> Result<(String, String), RepositoryError> {
        let key = self.key(id);
        let local = E::NAMESPACE.local_id(&key).to_string();
        if E::NAMESPACE.contains_key(&local) {
            return Err(RepositoryError::InvalidId {
                entity: E::NAMESPACE.entity_name(),
                id: id.to_string(),
                prefix: E::NAMESPACE.prefix(),
            });
        }
        Ok((key, local))
    }

    fn write<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        key: &str,
        entity: &E,
    ) -> Result<(), RepositoryError> {
        let bytes = self.codec.encode(entity)?;
        store.put_state(key, &bytes)?;
        debug!(
            key = %key,
            entity = E::NAMESPACE.entity_name(),
            bytes = bytes.len(),
            "Wrote record"
        );
        Ok(())
    }

    fn already_exists(&self, id: String) -> RepositoryError {
        RepositoryError::AlreadyExists {
            entity: E::NAMESPACE.entity_name(),
            id,
        }
    }

    fn not_found(&self, id: String) -> RepositoryError {
        RepositoryError::NotFound {
            entity: E::NAMESPACE.entity_name(),
            id,
        }
    }
}
