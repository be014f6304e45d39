//! SQLite storage provider
//!
//! Durable key-value backend over a pooled SQLite connection. Each value is
//! one row in a flat `kv_entries` table.

use std::path::Path;
use std::sync::Arc;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OpenFlags};

use super::{StorageProvider, StorageResult};

/// SQLite-backed storage provider
#[derive(Clone)]
pub struct SqliteStorage {
    pool: Arc<Pool<SqliteConnectionManager>>,
}

impl SqliteStorage {
    /// Open (or create) the backing database file
    pub fn new<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let manager = SqliteConnectionManager::file(path)
            .with_flags(
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_URI,
            )
            .with_init(|conn| {
                conn.execute_batch(
                    "PRAGMA journal_mode = WAL;
                     PRAGMA synchronous = NORMAL;
                     PRAGMA temp_store = MEMORY;",
                )?;
                Ok(())
            });

        let pool = Pool::builder().max_size(4).build(manager)?;

        let storage = Self {
            pool: Arc::new(pool),
        };
        storage.init_schema()?;
        Ok(storage)
    }

    fn init_schema(&self) -> StorageResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_entries (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;
        Ok(())
    }

    fn conn(&self) -> StorageResult<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }
}

impl StorageProvider for SqliteStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let conn = self.conn()?;
        let result = conn.query_row(
            "SELECT value FROM kv_entries WHERE key = ?1",
            [key],
            |row| row.get(0),
        );
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    fn multi_remove(&self, keys: &[&str]) -> StorageResult<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        for key in keys {
            tx.execute("DELETE FROM kv_entries WHERE key = ?1", [key])?;
        }
        tx.commit()?;
        Ok(())
    }
}
