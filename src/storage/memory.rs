use std::collections::HashMap;

use parking_lot::RwLock;

use super::{KeyValueStore, StorageError};

/// Process-local store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::new();
        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("other").unwrap(), None);
    }
}
