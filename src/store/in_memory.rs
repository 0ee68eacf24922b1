//! InMemoryRecordStore - HashMap-backed record store for tests and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{resolve_key, RecordStore, StoreError};
use crate::record::Record;

/// One collection's rows, kept in insertion order.
#[derive(Default)]
struct Collection {
    next_seq: u64,
    order: Vec<String>,
    rows: HashMap<String, Vec<u8>>,
}

impl Collection {
    fn put(&mut self, key: String, bytes: Vec<u8>) {
        if !self.rows.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.rows.insert(key, bytes);
    }

    fn remove(&mut self, key: &str) {
        if self.rows.remove(key).is_some() {
            self.order.retain(|k| k != key);
        }
    }
}

/// In-memory record store backed by a HashMap per collection.
///
/// Records are stored serialized, so callers never share state with the
/// store. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    storage: Arc<RwLock<HashMap<&'static str, Collection>>>,
}

impl InMemoryRecordStore {
    /// Create a new empty record store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn find_all<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        let Some(collection) = storage.get(R::COLLECTION) else {
            return Ok(Vec::new());
        };

        collection
            .order
            .iter()
            .filter_map(|key| collection.rows.get(key))
            .map(|bytes| serde_json::from_slice(bytes).map_err(StoreError::from))
            .collect()
    }

    fn find_by_id<R: Record>(&self, id: &R::Key) -> Result<Option<R>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        match storage
            .get(R::COLLECTION)
            .and_then(|collection| collection.rows.get(&id.to_string()))
        {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    fn save<R: Record>(&self, mut record: R) -> Result<R, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        let collection = storage.entry(R::COLLECTION).or_default();

        let key = resolve_key(&mut record, &mut collection.next_seq)?;
        let bytes = serde_json::to_vec(&record)?;
        collection.put(key.to_string(), bytes);

        Ok(record)
    }

    fn delete<R: Record>(&self, record: &R) -> Result<(), StoreError> {
        let Some(key) = record.key() else {
            return Ok(());
        };

        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        if let Some(collection) = storage.get_mut(R::COLLECTION) {
            collection.remove(&key.to_string());
        }

        Ok(())
    }
}
