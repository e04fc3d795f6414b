//! Cache Store Module
//!
//! The cache-aside engine over the persistent substrate: namespaced keys,
//! TTL expiration, quota recovery, and bulk clearing.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::cache::{CacheEntry, CacheStats, CACHE_PREFIX, DEFAULT_TTL_MS};
use crate::error::StorageError;
use crate::storage::StorageBackend;

// == Browser Cache ==
/// Namespaced cache-aside store with automatic TTL expiration.
///
/// Every public operation is exception-safe from the caller's perspective:
/// corrupted entries, storage failures, and quota errors are caught, logged,
/// and converted into the operation's absent/no-op default. A cache failure
/// therefore always looks like a cache miss, never like an application
/// failure.
#[derive(Debug)]
pub struct BrowserCache<S> {
    /// Persistent key-value substrate
    storage: S,
    /// TTL applied when `set` is called without an override
    default_ttl_ms: u64,
}

impl<S: StorageBackend> BrowserCache<S> {
    // == Constructor ==
    /// Creates a cache over `storage` with the 30-day default TTL.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            default_ttl_ms: DEFAULT_TTL_MS,
        }
    }

    /// Overrides the default TTL in milliseconds.
    pub fn with_default_ttl(mut self, default_ttl_ms: u64) -> Self {
        self.default_ttl_ms = default_ttl_ms;
        self
    }

    /// Returns true if the underlying substrate is usable here.
    pub fn is_available(&self) -> bool {
        self.storage.is_available()
    }

    /// Prefixes a logical resource key with the cache namespace.
    fn cache_key(key: &str) -> String {
        format!("{CACHE_PREFIX}{key}")
    }

    // == Get ==
    /// Retrieves the cached payload for `key`, checking expiration.
    ///
    /// Returns None on miss, on decode failure, outside a storage-capable
    /// context, and after expiry. An expired entry is removed on read so
    /// the substrate self-cleans without waiting for a sweep.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        if !self.storage.is_available() {
            return None;
        }

        let cache_key = Self::cache_key(key);
        let raw = match self.storage.get_item(&cache_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key, %err, "cache read error");
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                // Corrupted entry: treat as a miss, leave cleanup to the sweep
                warn!(key, %err, "cache entry failed to decode");
                return None;
            }
        };

        if entry.is_expired() {
            debug!(key, "cache entry expired, removing");
            self.remove(key);
            return None;
        }

        Some(entry.data)
    }

    // == Set ==
    /// Stores `data` under `key` with the given TTL (default 30 days).
    ///
    /// On a quota error the cache purges every expired entry in the
    /// namespace and retries the write exactly once; a second failure is
    /// logged and swallowed. Write loss is acceptable, the cache is
    /// best-effort.
    pub fn set<T: Serialize>(&self, key: &str, data: &T, ttl_ms: Option<u64>) {
        if !self.storage.is_available() {
            return;
        }

        let entry = CacheEntry::new(data, ttl_ms.unwrap_or(self.default_ttl_ms));
        let encoded = match serde_json::to_string(&entry) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(key, %err, "cache entry failed to encode");
                return;
            }
        };

        let cache_key = Self::cache_key(key);
        match self.storage.set_item(&cache_key, &encoded) {
            Ok(()) => {}
            Err(StorageError::QuotaExceeded) => {
                warn!(key, "storage quota exceeded, purging expired entries");
                self.clear_expired();

                if let Err(err) = self.storage.set_item(&cache_key, &encoded) {
                    error!(key, %err, "cache write failed even after cleanup");
                }
            }
            Err(err) => {
                error!(key, %err, "cache write error");
            }
        }
    }

    // == Remove ==
    /// Deletes the one namespaced entry for `key`; no-op if absent.
    pub fn remove(&self, key: &str) {
        if !self.storage.is_available() {
            return;
        }

        if let Err(err) = self.storage.remove_item(&Self::cache_key(key)) {
            warn!(key, %err, "cache remove error");
        }
    }

    // == Clear All ==
    /// Deletes every entry under the cache namespace.
    ///
    /// Keys outside the namespace are never touched.
    pub fn clear_all(&self) {
        if !self.storage.is_available() {
            return;
        }

        for key in self.namespaced_keys() {
            if let Err(err) = self.storage.remove_item(&key) {
                warn!(%key, %err, "cache clear error");
            }
        }
    }

    // == Clear Expired ==
    /// Deletes every expired entry in the namespace.
    ///
    /// Entries that fail to decode are treated as eligible for cleanup and
    /// deleted as well. Valid, unexpired entries are left untouched.
    pub fn clear_expired(&self) {
        if !self.storage.is_available() {
            return;
        }

        for key in self.namespaced_keys() {
            let raw = match self.storage.get_item(&key) {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(err) => {
                    warn!(%key, %err, "cache read error during sweep");
                    continue;
                }
            };

            let delete = match serde_json::from_str::<CacheEntry<Value>>(&raw) {
                Ok(entry) => entry.is_expired(),
                // Corrupted entries are swept out with the expired ones
                Err(_) => true,
            };

            if delete {
                if let Err(err) = self.storage.remove_item(&key) {
                    warn!(%key, %err, "cache remove error during sweep");
                }
            }
        }
    }

    // == Stats ==
    /// Computes usage statistics by scanning the namespace.
    ///
    /// Returns zeroed stats outside a storage-capable context or when the
    /// cache is empty. Undecodable entries count toward key and size totals
    /// (raw string length) but not toward the oldest entry.
    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats::new();

        if !self.storage.is_available() {
            return stats;
        }

        for key in self.namespaced_keys() {
            let raw = match self.storage.get_item(&key) {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(err) => {
                    warn!(%key, %err, "cache read error during stats scan");
                    continue;
                }
            };

            let timestamp = serde_json::from_str::<CacheEntry<Value>>(&raw)
                .ok()
                .map(|entry| entry.timestamp);
            stats.record_entry(raw.len(), timestamp);
        }

        stats
    }

    /// Enumerates every substrate key under the cache namespace.
    fn namespaced_keys(&self) -> Vec<String> {
        match self.storage.keys() {
            Ok(keys) => keys
                .into_iter()
                .filter(|key| key.starts_with(CACHE_PREFIX))
                .collect(),
            Err(err) => {
                warn!(%err, "cache key enumeration error");
                Vec::new()
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, UnavailableStorage};
    use std::thread::sleep;
    use std::time::Duration;

    fn test_cache() -> BrowserCache<MemoryStorage> {
        BrowserCache::new(MemoryStorage::new())
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        let cache = test_cache();
        let data = vec!["a".to_string(), "b".to_string()];

        cache.set("experiences", &data, None);
        let loaded: Option<Vec<String>> = cache.get("experiences");

        assert_eq!(loaded, Some(data));
    }

    #[test]
    fn test_get_missing_key() {
        let cache = test_cache();
        let loaded: Option<Vec<String>> = cache.get("nonexistent");
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_keys_are_namespaced() {
        let storage = MemoryStorage::new();
        storage.set_item("unrelated", "keep me").unwrap();
        let cache = BrowserCache::new(storage);

        cache.set("projects", &1u32, None);

        let mut keys = cache.storage.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["portfolio_cache_projects", "unrelated"]);
    }

    #[test]
    fn test_ttl_expiry_removes_entry_on_read() {
        let cache = test_cache();

        cache.set("projects", &vec![1, 2, 3], Some(10));
        assert_eq!(cache.get::<Vec<i32>>("projects"), Some(vec![1, 2, 3]));

        sleep(Duration::from_millis(20));

        assert_eq!(cache.get::<Vec<i32>>("projects"), None);
        // The expired entry was deleted by the read itself
        assert_eq!(
            cache
                .storage
                .get_item("portfolio_cache_projects")
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_remove_is_per_key() {
        let cache = test_cache();

        cache.set("a", &1u32, None);
        cache.set("b", &2u32, None);
        cache.remove("a");

        assert_eq!(cache.get::<u32>("a"), None);
        assert_eq!(cache.get::<u32>("b"), Some(2));
    }

    #[test]
    fn test_clear_all_leaves_foreign_keys() {
        let storage = MemoryStorage::new();
        storage.set_item("other_app_state", "untouched").unwrap();
        let cache = BrowserCache::new(storage);

        cache.set("a", &1u32, None);
        cache.set("b", &2u32, None);
        cache.clear_all();

        assert_eq!(cache.get::<u32>("a"), None);
        assert_eq!(cache.get::<u32>("b"), None);
        assert_eq!(
            cache.storage.get_item("other_app_state").unwrap(),
            Some("untouched".to_string())
        );
    }

    #[test]
    fn test_corrupted_entry_is_a_miss() {
        let storage = MemoryStorage::new();
        storage
            .set_item("portfolio_cache_projects", "invalid json{")
            .unwrap();
        let cache = BrowserCache::new(storage);

        assert_eq!(cache.get::<Vec<i32>>("projects"), None);
    }

    #[test]
    fn test_clear_expired_sweeps_corrupted_and_expired() {
        let storage = MemoryStorage::new();
        storage
            .set_item("portfolio_cache_broken", "invalid json{")
            .unwrap();
        let cache = BrowserCache::new(storage);

        cache.set("short", &1u32, Some(10));
        cache.set("long", &2u32, Some(60_000));
        sleep(Duration::from_millis(20));

        cache.clear_expired();

        assert_eq!(
            cache.storage.get_item("portfolio_cache_broken").unwrap(),
            None
        );
        assert_eq!(
            cache.storage.get_item("portfolio_cache_short").unwrap(),
            None
        );
        assert_eq!(cache.get::<u32>("long"), Some(2));
    }

    #[test]
    fn test_quota_recovery_after_sweep() {
        // Capacity fits one entry plus an expired one, not two live entries
        let cache = BrowserCache::new(MemoryStorage::with_capacity(120));

        cache.set("old", &"xxxxxxxxxx", Some(10));
        sleep(Duration::from_millis(20));

        // First write attempt hits the quota, sweep evicts "old", retry lands
        cache.set("new", &"yyyyyyyyyy", None);

        assert_eq!(cache.get::<String>("new"), Some("yyyyyyyyyy".to_string()));
        assert_eq!(cache.get::<String>("old"), None);
    }

    #[test]
    fn test_quota_second_failure_is_swallowed() {
        // Too small for the entry even after sweeping
        let cache = BrowserCache::new(MemoryStorage::with_capacity(8));

        cache.set("big", &"zzzzzzzzzzzzzzzzzzzz", None);

        assert_eq!(cache.get::<String>("big"), None);
    }

    #[test]
    fn test_stats_counts_and_oldest() {
        let cache = test_cache();

        cache.set("a", &1u32, None);
        cache.set("b", &2u32, None);
        cache.set("c", &3u32, None);

        let stats = cache.stats();
        assert_eq!(stats.total_keys, 3);
        assert!(stats.total_size > 0);
        assert!(stats.oldest_entry.is_some());

        cache.remove("b");
        assert_eq!(cache.stats().total_keys, 2);
    }

    #[test]
    fn test_stats_counts_undecodable_entries() {
        let storage = MemoryStorage::new();
        storage
            .set_item("portfolio_cache_broken", "invalid json{")
            .unwrap();
        let cache = BrowserCache::new(storage);

        let stats = cache.stats();
        assert_eq!(stats.total_keys, 1);
        assert_eq!(stats.total_size, "invalid json{".len());
        assert_eq!(stats.oldest_entry, None);
    }

    #[test]
    fn test_unavailable_context_degrades_to_noop() {
        let cache = BrowserCache::new(UnavailableStorage);

        cache.set("projects", &vec![1], None);
        assert_eq!(cache.get::<Vec<i32>>("projects"), None);
        cache.remove("projects");
        cache.clear_all();
        cache.clear_expired();
        assert_eq!(cache.stats(), CacheStats::new());
    }

    #[test]
    fn test_custom_default_ttl() {
        let cache = BrowserCache::new(MemoryStorage::new()).with_default_ttl(10);

        cache.set("projects", &1u32, None);
        sleep(Duration::from_millis(20));

        assert_eq!(cache.get::<u32>("projects"), None);
    }
}
