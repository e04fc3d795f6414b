//! Cache Module
//!
//! Namespaced cache-aside storage with TTL expiration over a persistent
//! string substrate.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::BrowserCache;

// == Public Constants ==
/// Namespace prefix applied to every persisted cache key
pub const CACHE_PREFIX: &str = "portfolio_cache_";

/// Default TTL: 30 days in milliseconds
pub const DEFAULT_TTL_MS: u64 = 30 * 24 * 60 * 60 * 1000;
