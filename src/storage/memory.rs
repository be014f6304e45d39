//! In-memory storage provider
//!
//! Backs tests and ephemeral sessions; nothing survives the process.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{StorageError, StorageProvider, StorageResult};

/// HashMap-backed storage provider
///
/// Clones share the same underlying map, mirroring how the SQLite provider
/// shares its pool.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StorageResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Backend("storage mutex poisoned".to_string()))
    }
}

impl StorageProvider for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn multi_remove(&self, keys: &[&str]) -> StorageResult<()> {
        let mut entries = self.lock()?;
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}
