//! Storage Module
//!
//! Defines the persistent key-value substrate the cache is built on, plus
//! the in-process implementations used by the binary and the tests.

mod memory;

pub use memory::{MemoryStorage, UnavailableStorage};

use crate::error::StorageError;

// == Storage Backend Trait ==
/// Synchronous, string-keyed, string-valued persistent storage.
///
/// This is the narrow contract the cache layer relies on: get/set/remove
/// plus key enumeration, all synchronous. Implementations signal a full
/// backend with [`StorageError::QuotaExceeded`] so the cache can run its
/// recovery pass.
///
/// `is_available` models execution contexts without any durable storage
/// (e.g. server-side rendering); when it returns `false` every cache
/// operation degrades to its absent/no-op default without touching the
/// other methods.
pub trait StorageBackend: Send + Sync {
    /// Returns true if the backend can be used in this execution context.
    fn is_available(&self) -> bool {
        true
    }

    /// Reads the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`; no-op if absent.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Returns every key currently present in the backend.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

// A shared handle to a backend is itself a backend; the substrate is one
// global resource referenced from the cache, the diagnostics registry, and
// tests at the same time.
impl<S: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        (**self).keys()
    }
}
