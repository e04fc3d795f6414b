//! In-process storage backends.
//!
//! `MemoryStorage` stands in for the browser's localStorage: a flat string
//! map with a byte capacity that raises a quota error when full.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StorageError;
use crate::storage::StorageBackend;

// == Memory Storage ==
/// Capacity-bounded in-memory storage backend.
///
/// Usage is measured as the sum of key and value byte lengths. A write that
/// would push usage past the configured capacity fails with
/// [`StorageError::QuotaExceeded`] and leaves the existing contents
/// untouched, which is what the cache's quota-recovery path expects.
#[derive(Debug)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    /// Maximum total bytes, None = unbounded
    capacity: Option<usize>,
}

impl MemoryStorage {
    /// Creates an unbounded storage backend.
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            capacity: None,
        }
    }

    /// Creates a storage backend bounded to `capacity` total bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            capacity: Some(capacity),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.items
            .lock()
            .map_err(|_| StorageError::Backend("storage mutex poisoned".to_string()))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.lock()?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.lock()?;

        if let Some(capacity) = self.capacity {
            let current: usize = items.iter().map(|(k, v)| k.len() + v.len()).sum();
            let replaced = items.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let projected = current - replaced + key.len() + value.len();

            if projected > capacity {
                return Err(StorageError::QuotaExceeded);
            }
        }

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.lock()?;
        items.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let items = self.lock()?;
        Ok(items.keys().cloned().collect())
    }
}

// == Unavailable Storage ==
/// Backend for execution contexts with no durable storage at all.
///
/// Models server-side rendering: `is_available` reports false, and the
/// cache layer short-circuits every operation before reaching the other
/// methods. The methods still answer sanely if called directly.
#[derive(Debug, Default)]
pub struct UnavailableStorage;

impl StorageBackend for UnavailableStorage {
    fn is_available(&self) -> bool {
        false
    }

    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Unavailable)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let storage = MemoryStorage::new();

        storage.set_item("key1", "value1").unwrap();
        assert_eq!(storage.get_item("key1").unwrap(), Some("value1".to_string()));
        assert_eq!(storage.get_item("missing").unwrap(), None);
    }

    #[test]
    fn test_remove() {
        let storage = MemoryStorage::new();

        storage.set_item("key1", "value1").unwrap();
        storage.remove_item("key1").unwrap();
        assert_eq!(storage.get_item("key1").unwrap(), None);

        // Removing an absent key is a no-op
        storage.remove_item("key1").unwrap();
    }

    #[test]
    fn test_keys_enumeration() {
        let storage = MemoryStorage::new();

        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();

        let mut keys = storage.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_quota_exceeded() {
        let storage = MemoryStorage::with_capacity(10);

        storage.set_item("k", "12345").unwrap(); // 6 bytes
        let result = storage.set_item("x", "123456789"); // would be 16 bytes
        assert!(matches!(result, Err(StorageError::QuotaExceeded)));

        // Prior contents survive the failed write
        assert_eq!(storage.get_item("k").unwrap(), Some("12345".to_string()));
    }

    #[test]
    fn test_quota_overwrite_accounts_for_replaced_value() {
        let storage = MemoryStorage::with_capacity(10);

        storage.set_item("k", "123456789").unwrap(); // 10 bytes
        // Overwriting with a smaller value must succeed
        storage.set_item("k", "1").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), Some("1".to_string()));
    }

    #[test]
    fn test_unavailable_storage() {
        let storage = UnavailableStorage;

        assert!(!storage.is_available());
        assert!(matches!(
            storage.get_item("any"),
            Err(StorageError::Unavailable)
        ));
    }
}
