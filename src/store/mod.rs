//! Stores - persistence for records, keyed by primary identifier.
//!
//! A [`RecordStore`] owns every stored record. Each call is atomic from the
//! caller's perspective; there are no multi-record transactions.
//!
//! ## Example
//!
//! ```ignore
//! use campus_crud::store::{InMemoryRecordStore, RecordsExt};
//!
//! let store = InMemoryRecordStore::new();
//! let saved = store.records::<Article>().save(article)?;
//! let loaded = store.records::<Article>().find_by_id(&saved.id)?;
//! ```

mod in_memory;
mod records;
#[cfg(feature = "sqlite")]
mod sqlite;

use std::fmt;

use crate::record::Record;

pub use in_memory::InMemoryRecordStore;
pub use records::{Records, RecordsExt};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRecordStore;

/// CRUD storage for records of any [`Record`] type.
pub trait RecordStore: Send + Sync {
    /// Every stored record of type `R`, in insertion order.
    fn find_all<R: Record>(&self) -> Result<Vec<R>, StoreError>;

    /// Look up a record by identifier. Absence is `Ok(None)`, never an error.
    fn find_by_id<R: Record>(&self, id: &R::Key) -> Result<Option<R>, StoreError>;

    /// Insert or fully replace a record.
    ///
    /// A record without an identifier gets the next generated one; natural-key
    /// records without an identifier are rejected with
    /// [`StoreError::MissingKey`]. Returns the stored record.
    fn save<R: Record>(&self, record: R) -> Result<R, StoreError>;

    /// Remove a record. Removing a record that is already gone is a no-op.
    fn delete<R: Record>(&self, record: &R) -> Result<(), StoreError>;
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A store lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    /// Serialization/deserialization error.
    Serde(String),
    /// Storage-level error.
    Storage(String),
    /// A natural-key record was saved without its key.
    MissingKey { collection: &'static str },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Serde(msg) => write!(f, "record serialization error: {}", msg),
            StoreError::Storage(msg) => write!(f, "record storage error: {}", msg),
            StoreError::MissingKey { collection } => {
                write!(f, "record in {} saved without an identifier", collection)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

/// Resolve the identifier a record will be stored under, generating one when
/// it is unset. `next_seq` is the last generated sequence for the collection.
pub(crate) fn resolve_key<R: Record>(
    record: &mut R,
    next_seq: &mut u64,
) -> Result<R::Key, StoreError> {
    use crate::record::RecordKey;

    if let Some(key) = record.key() {
        if let Some(seq) = key.sequence() {
            *next_seq = (*next_seq).max(seq);
        }
        return Ok(key);
    }

    let key = R::Key::generated(*next_seq + 1).ok_or(StoreError::MissingKey {
        collection: R::COLLECTION,
    })?;
    *next_seq += 1;
    record.set_key(key.clone());
    Ok(key)
}
