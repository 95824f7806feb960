//! Durable key-value storage, modelled on browser local storage.
//!
//! Values are strings (JSON-encoded by the callers). Each concern owns one fixed key
//! and never touches the others.

mod file;
mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

pub const CART_KEY: &str = "lmcycle-cart-v2";
pub const LOYALTY_KEY: &str = "lmcycle-loyalty";
pub const WISHLIST_KEY: &str = "lmcycle-wishlist";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Storage I/O error for {key}: {source}")]
    Io { key: String, source: std::io::Error },

    #[error("Failed to encode value for {key}: {source}")]
    Encode { key: String, source: serde_json::Error },
}

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value. Any failure falls back to `T::default()` and is
/// logged; nothing is propagated.
pub(crate) fn load_json<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(err) => {
            tracing::warn!(key, error = %err, "storage read failed, using default");
            return T::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "stored value is malformed, using default");
            T::default()
        }
    }
}

/// Encode and write. Failures are logged; the caller carries on.
pub(crate) fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(|source| StorageError::Encode { key: key.to_string(), source })
        .and_then(|raw| store.set(key, &raw));
    if let Err(err) = result {
        tracing::error!(key, error = %err, "failed to persist value");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Store whose every read and write fails.
    pub(crate) struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            let source = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
            Err(StorageError::Io { key: key.to_string(), source })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
            Err(StorageError::Io { key: key.to_string(), source })
        }
    }

    #[test]
    fn test_failing_store_falls_back() {
        let store = FailingStore;
        assert_eq!(load_json::<Vec<u32>>(&store, WISHLIST_KEY), Vec::<u32>::new());
        save_json(&store, WISHLIST_KEY, &[1u32]);
    }

    #[test]
    fn test_load_json_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<Vec<u32>>(&store, WISHLIST_KEY), Vec::<u32>::new());
        store.set(WISHLIST_KEY, "not-json").unwrap();
        assert_eq!(load_json::<Vec<u32>>(&store, WISHLIST_KEY), Vec::<u32>::new());
        store.set(WISHLIST_KEY, "{\"a\":1}").unwrap();
        assert_eq!(load_json::<Vec<u32>>(&store, WISHLIST_KEY), Vec::<u32>::new());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save_json(&store, WISHLIST_KEY, &[3u32, 1]);
        assert_eq!(store.get(WISHLIST_KEY).unwrap().as_deref(), Some("[3,1]"));
        assert_eq!(load_json::<Vec<u32>>(&store, WISHLIST_KEY), vec![3, 1]);
    }
}
