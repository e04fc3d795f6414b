//! Portfolio Cache - demo loader binary
//!
//! Wires the cache-aside store, the diagnostics registry, and the HTTP
//! fetcher together, then loads every portfolio resource once and reports
//! where each came from.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_cache::cache::BrowserCache;
use portfolio_cache::client::{HttpFetcher, PortfolioClient};
use portfolio_cache::config::Config;
use portfolio_cache::diagnostics::register_diagnostics;
use portfolio_cache::storage::MemoryStorage;

/// Startup sequence:
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the cache over the in-process substrate
/// 4. Register the diagnostics escape hatch
/// 5. Load every resource through the cache-aside path
/// 6. Report cache statistics
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio cache loader");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: backend={}, ttl={}ms, attempts={}, delay={}ms",
        config.backend_endpoint, config.cache_ttl_ms, config.retry_attempts, config.retry_delay_ms
    );

    let cache = Arc::new(
        BrowserCache::new(MemoryStorage::new()).with_default_ttl(config.cache_ttl_ms),
    );
    register_diagnostics(Arc::clone(&cache));

    let fetcher = HttpFetcher::new(config.backend_endpoint.clone());
    let client = PortfolioClient::new(Arc::clone(&cache), fetcher).with_retry(
        config.retry_attempts,
        std::time::Duration::from_millis(config.retry_delay_ms),
    );

    load_all(&client).await;

    let stats = cache.stats();
    info!(
        "Cache stats: {} keys, {} bytes, oldest entry at {:?}",
        stats.total_keys, stats.total_size, stats.oldest_entry
    );

    Ok(())
}

/// Loads every resource once, logging outcome and provenance.
async fn load_all<S, F>(client: &PortfolioClient<S, F>)
where
    S: portfolio_cache::storage::StorageBackend,
    F: portfolio_cache::client::ApiFetcher,
{
    match client.experiences().await {
        Ok(res) => info!(
            count = res.data.len(),
            from_cache = res.from_cache,
            "loaded experiences"
        ),
        Err(err) => error!(%err, "failed to load experiences"),
    }

    match client.company_durations().await {
        Ok(res) => info!(
            count = res.data.len(),
            from_cache = res.from_cache,
            "loaded company durations"
        ),
        Err(err) => error!(%err, "failed to load company durations"),
    }

    match client.total_duration().await {
        Ok(res) => info!(
            total = %res.data.total_duration,
            from_cache = res.from_cache,
            "loaded total duration"
        ),
        Err(err) => error!(%err, "failed to load total duration"),
    }

    match client.projects().await {
        Ok(res) => info!(
            count = res.data.len(),
            from_cache = res.from_cache,
            "loaded projects"
        ),
        Err(err) => error!(%err, "failed to load projects"),
    }

    match client.education().await {
        Ok(res) => info!(
            formations = res.data.formations.len(),
            certifications = res.data.certifications.len(),
            from_cache = res.from_cache,
            "loaded education"
        ),
        Err(err) => error!(%err, "failed to load education"),
    }

    match client.social_links().await {
        Ok(res) => info!(
            count = res.data.len(),
            from_cache = res.from_cache,
            "loaded social links"
        ),
        Err(err) => error!(%err, "failed to load social links"),
    }
}
