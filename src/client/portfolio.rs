//! Portfolio Client
//!
//! Per-resource loaders following one fixed composition: check the cache,
//! fall back to a retried network fetch, validate the shape, populate the
//! cache, and report where the data came from.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::cache::BrowserCache;
use crate::client::{
    ApiFetcher, CompanyDuration, Education, Experience, Project, ResourceKey, SocialLink,
    TotalDuration,
};
use crate::error::FetchError;
use crate::retry::{retry_async, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_DELAY_MS};
use crate::storage::StorageBackend;

// == Resource Data ==
/// A loaded resource plus its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceData<T> {
    /// The resource payload
    pub data: T,
    /// True when the payload was served from the cache without a network call
    pub from_cache: bool,
}

// == Portfolio Client ==
/// Loads portfolio content through the cache-aside store.
///
/// Cache failures never surface here; they degrade to a miss and the loader
/// falls through to the network. The only errors a caller sees are network
/// failures after retry exhaustion and shape-validation failures, and
/// neither writes anything to the cache.
pub struct PortfolioClient<S, F> {
    cache: Arc<BrowserCache<S>>,
    fetcher: F,
    retry_attempts: u32,
    retry_delay: Duration,
}

impl<S, F> PortfolioClient<S, F>
where
    S: StorageBackend,
    F: ApiFetcher,
{
    // == Constructor ==
    /// Creates a client with the default retry policy (3 attempts, 1s apart).
    pub fn new(cache: Arc<BrowserCache<S>>, fetcher: F) -> Self {
        Self {
            cache,
            fetcher,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }

    /// Overrides the retry policy for network fetches.
    pub fn with_retry(mut self, attempts: u32, delay: Duration) -> Self {
        self.retry_attempts = attempts;
        self.retry_delay = delay;
        self
    }

    // == Generic Loader ==
    /// Loads one resource: cache hit short-circuits the network entirely;
    /// on a miss the fetch is retried, validated, and written back with the
    /// default TTL.
    async fn load<T>(&self, key: ResourceKey) -> Result<ResourceData<T>, FetchError>
    where
        T: Serialize + DeserializeOwned,
    {
        if let Some(data) = self.cache.get::<T>(key.as_str()) {
            debug!(resource = %key, "cache hit");
            return Ok(ResourceData {
                data,
                from_cache: true,
            });
        }

        debug!(resource = %key, "cache miss, fetching from backend");
        let value = retry_async(
            || self.fetcher.fetch_json(key.endpoint()),
            self.retry_attempts,
            self.retry_delay,
        )
        .await?;

        // Shape validation: a body that does not deserialize into the
        // resource type is an invalid response, not a partial success.
        let data: T = serde_json::from_value(value)
            .map_err(|err| FetchError::InvalidResponse(err.to_string()))?;

        self.cache.set(key.as_str(), &data, None);
        info!(resource = %key, "resource fetched and cached");

        Ok(ResourceData {
            data,
            from_cache: false,
        })
    }

    // == Resource Loaders ==
    /// Loads the experience entries.
    pub async fn experiences(&self) -> Result<ResourceData<Vec<Experience>>, FetchError> {
        self.load(ResourceKey::Experiences).await
    }

    /// Loads the per-company duration summaries.
    pub async fn company_durations(&self) -> Result<ResourceData<Vec<CompanyDuration>>, FetchError> {
        self.load(ResourceKey::CompanyDurations).await
    }

    /// Loads the total career duration.
    pub async fn total_duration(&self) -> Result<ResourceData<TotalDuration>, FetchError> {
        self.load(ResourceKey::TotalDuration).await
    }

    /// Loads the project entries.
    pub async fn projects(&self) -> Result<ResourceData<Vec<Project>>, FetchError> {
        self.load(ResourceKey::Projects).await
    }

    /// Loads the education bundle.
    pub async fn education(&self) -> Result<ResourceData<Education>, FetchError> {
        self.load(ResourceKey::Education).await
    }

    /// Loads the social media links.
    pub async fn social_links(&self) -> Result<ResourceData<Vec<SocialLink>>, FetchError> {
        self.load(ResourceKey::SocialLinks).await
    }
}
