//! Diagnostics Module
//!
//! Process-wide escape hatch for manual cache invalidation, reachable from
//! outside normal application code paths (an operator console, a debug
//! command). A cache handle is registered once at startup; clearing is a
//! safe no-op before registration or on an empty cache.

use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use crate::cache::BrowserCache;
use crate::storage::StorageBackend;

// == Cache Admin Trait ==
/// The invalidation surface the registry needs, type-erased over the
/// storage backend.
trait CacheAdmin: Send + Sync {
    fn clear_all(&self);
    fn remove(&self, key: &str);
}

impl<S: StorageBackend> CacheAdmin for BrowserCache<S> {
    fn clear_all(&self) {
        BrowserCache::clear_all(self);
    }

    fn remove(&self, key: &str) {
        BrowserCache::remove(self, key);
    }
}

static REGISTRY: OnceLock<Arc<dyn CacheAdmin>> = OnceLock::new();

// == Registration ==
/// Registers `cache` as the target of [`clear_portfolio_cache`].
///
/// Idempotent: the first registration wins and later calls are ignored.
/// Skipped entirely when the cache's substrate is unavailable (nothing to
/// clear in that execution context).
pub fn register_diagnostics<S>(cache: Arc<BrowserCache<S>>)
where
    S: StorageBackend + 'static,
{
    if !cache.is_available() {
        debug!("storage unavailable, skipping diagnostics registration");
        return;
    }

    if REGISTRY.set(cache).is_err() {
        debug!("diagnostics cache already registered");
    }
}

// == Clear Portfolio Cache ==
/// Clears the portfolio cache, entirely or for one resource.
///
/// With `None` every namespaced entry is removed; with a resource name
/// (e.g. `"projects"`) only that entry is removed. Safe to call at any
/// time: an empty cache or a missing registration is a no-op.
pub fn clear_portfolio_cache(resource: Option<&str>) {
    let Some(cache) = REGISTRY.get() else {
        debug!("no cache registered, nothing to clear");
        return;
    };

    match resource {
        Some(resource) => {
            cache.remove(resource);
            info!(resource, "cache cleared for resource");
        }
        None => {
            cache.clear_all();
            info!("all portfolio cache cleared");
        }
    }
}
