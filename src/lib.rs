//! Portfolio Cache - a namespaced TTL cache-aside layer with resilient fetch
//!
//! Provides browser-cache-style semantics over a pluggable key-value
//! substrate: best-effort reads and writes that never fail the caller, TTL
//! expiration with self-cleaning reads, quota recovery, and per-resource
//! loaders that compose the cache with a retried backend fetch.

pub mod cache;
pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod retry;
pub mod storage;

pub use cache::{BrowserCache, CacheStats};
pub use client::{PortfolioClient, ResourceKey};
pub use config::Config;
pub use diagnostics::{clear_portfolio_cache, register_diagnostics};
pub use retry::retry_async;
