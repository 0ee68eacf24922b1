//! SqliteRecordStore - SQLite-backed record store.
//!
//! Records are kept as JSON bodies in a single `records` table keyed by
//! `(collection, record_key)`; `seq` preserves insertion order across
//! replacements. Generated identifiers come from the `sequences` table, one
//! row per collection, so they are never reused after a delete.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::{resolve_key, RecordStore, StoreError};
use crate::record::Record;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS records (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    collection TEXT NOT NULL,
    record_key TEXT NOT NULL,
    body TEXT NOT NULL,
    UNIQUE (collection, record_key)
);
CREATE TABLE IF NOT EXISTS sequences (
    collection TEXT PRIMARY KEY,
    next_id INTEGER NOT NULL
);";

/// Record store over a single SQLite connection.
///
/// The connection sits behind a mutex; each store call holds it for exactly
/// one statement or one short transaction.
pub struct SqliteRecordStore {
    conn: Mutex<Connection>,
}

impl SqliteRecordStore {
    /// Open (or create) a database file and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened sqlite record store");
        Self::bootstrap(conn)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::LockPoisoned("sqlite connection"))
    }
}

impl RecordStore for SqliteRecordStore {
    fn find_all<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT body FROM records WHERE collection = ?1 ORDER BY seq")?;
        let bodies = stmt
            .query_map(params![R::COLLECTION], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        bodies
            .iter()
            .map(|body| serde_json::from_str(body).map_err(StoreError::from))
            .collect()
    }

    fn find_by_id<R: Record>(&self, id: &R::Key) -> Result<Option<R>, StoreError> {
        let conn = self.conn()?;
        let body = conn
            .query_row(
                "SELECT body FROM records WHERE collection = ?1 AND record_key = ?2",
                params![R::COLLECTION, id.to_string()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    fn save<R: Record>(&self, mut record: R) -> Result<R, StoreError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let current: i64 = tx
            .query_row(
                "SELECT next_id FROM sequences WHERE collection = ?1",
                params![R::COLLECTION],
                |row| row.get(0),
            )
            .optional()?
            .unwrap_or(0);
        let mut next_seq = u64::try_from(current)
            .map_err(|_| StoreError::Storage(format!("negative sequence for {}", R::COLLECTION)))?;

        let key = resolve_key(&mut record, &mut next_seq)?;
        let body = serde_json::to_string(&record)?;
        let next_id = i64::try_from(next_seq)
            .map_err(|_| StoreError::Storage(format!("sequence overflow for {}", R::COLLECTION)))?;

        tx.execute(
            "INSERT INTO sequences (collection, next_id) VALUES (?1, ?2)
             ON CONFLICT (collection) DO UPDATE SET next_id = MAX(next_id, excluded.next_id)",
            params![R::COLLECTION, next_id],
        )?;
        tx.execute(
            "INSERT INTO records (collection, record_key, body) VALUES (?1, ?2, ?3)
             ON CONFLICT (collection, record_key) DO UPDATE SET body = excluded.body",
            params![R::COLLECTION, key.to_string(), body],
        )?;
        tx.commit()?;

        debug!(collection = R::COLLECTION, key = %key, "saved record");
        Ok(record)
    }

    fn delete<R: Record>(&self, record: &R) -> Result<(), StoreError> {
        let Some(key) = record.key() else {
            return Ok(());
        };

        let conn = self.conn()?;
        conn.execute(
            "DELETE FROM records WHERE collection = ?1 AND record_key = ?2",
            params![R::COLLECTION, key.to_string()],
        )?;
        Ok(())
    }
}
