//! Records - typed accessor for one record type on any store.

use std::marker::PhantomData;

use super::{RecordStore, StoreError};
use crate::record::Record;

/// Typed repository view over the records of type `R`.
pub struct Records<'a, S, R> {
    store: &'a S,
    _marker: PhantomData<R>,
}

impl<'a, S: RecordStore, R: Record> Records<'a, S, R> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub fn find_all(&self) -> Result<Vec<R>, StoreError> {
        self.store.find_all::<R>()
    }

    pub fn find_by_id(&self, id: &R::Key) -> Result<Option<R>, StoreError> {
        self.store.find_by_id::<R>(id)
    }

    /// Insert or replace, assigning an identifier if needed.
    pub fn save(&self, record: R) -> Result<R, StoreError> {
        self.store.save(record)
    }

    pub fn delete(&self, record: &R) -> Result<(), StoreError> {
        self.store.delete(record)
    }
}

/// Extension trait for typed record access on any RecordStore.
pub trait RecordsExt: RecordStore + Sized {
    /// Get a typed repository for `R`.
    fn records<R: Record>(&self) -> Records<'_, Self, R> {
        Records::new(self)
    }
}

impl<S: RecordStore> RecordsExt for S {}
