//! Storage provider abstraction
//!
//! The store persists its entry lists through an injected key-value
//! provider so tests can substitute an in-memory fake for the on-device
//! SQLite backend.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use thiserror::Error;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage connection error: {0}")]
    Connection(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value persistence provider
///
/// Values are opaque strings; atomicity is guaranteed only per call, not
/// across a read-modify-write sequence.
pub trait StorageProvider {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any existing value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove every key in `keys` as one logical operation
    fn multi_remove(&self, keys: &[&str]) -> StorageResult<()>;
}
