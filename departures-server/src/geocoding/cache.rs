//! In-memory caching for geocoding results.
//!
//! Addresses resolve to the same place for a long time, and the index page
//! tends to re-query the same address on every refresh. Only successful
//! resolutions are cached; "not found" and errors always go upstream again.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::ResolvedAddress;

use super::Geocoder;
use super::error::GeocodingError;

/// Configuration for the geocode cache.
#[derive(Debug, Clone)]
pub struct GeocodeCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached addresses.
    pub max_capacity: u64,
}

impl Default for GeocodeCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Geocoder wrapper that remembers successful resolutions.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: MokaCache<String, ResolvedAddress>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    pub fn new(inner: G, config: &GeocodeCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Cache key: surrounding whitespace is not significant upstream.
    fn key(address: &str) -> String {
        address.trim().to_string()
    }

    /// Access the wrapped geocoder.
    pub fn inner(&self) -> &G {
        &self.inner
    }
}

#[async_trait]
impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    async fn resolve(&self, address: &str) -> Result<Option<ResolvedAddress>, GeocodingError> {
        let key = Self::key(address);

        if let Some(hit) = self.cache.get(&key).await {
            trace!(address, "Geocode cache hit");
            return Ok(Some(hit));
        }

        let resolved = self.inner.resolve(address).await?;
        if let Some(r) = &resolved {
            self.cache.insert(key, r.clone()).await;
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;
    use crate::testing::FakeGeocoder;

    #[tokio::test]
    async fn caches_successful_lookups() {
        let fake = FakeGeocoder::new().with_address(
            "Matinpuronkuja 1",
            ResolvedAddress::new(Coordinate::new(60.16, 24.74), "Matinpuronkuja 1, Espoo"),
        );
        let cached = CachedGeocoder::new(fake, &GeocodeCacheConfig::default());

        let first = cached.resolve("Matinpuronkuja 1").await.unwrap();
        let second = cached.resolve("  Matinpuronkuja 1 ").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cached.inner().calls(), 1);

        cached.cache.run_pending_tasks().await;
        assert_eq!(cached.cache.entry_count(), 1);
    }

    #[tokio::test]
    async fn does_not_cache_misses() {
        let cached = CachedGeocoder::new(FakeGeocoder::new(), &GeocodeCacheConfig::default());

        assert!(cached.resolve("Nowhereistan 9999").await.unwrap().is_none());
        assert!(cached.resolve("Nowhereistan 9999").await.unwrap().is_none());
        assert_eq!(cached.inner().calls(), 2);

        cached.cache.run_pending_tasks().await;
        assert_eq!(cached.cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn does_not_cache_errors() {
        let cached = CachedGeocoder::new(
            FakeGeocoder::new().failing_with(503),
            &GeocodeCacheConfig::default(),
        );

        assert!(cached.resolve("Kamppi").await.is_err());
        assert!(cached.resolve("Kamppi").await.is_err());
        assert_eq!(cached.inner().calls(), 2);
    }

    #[test]
    fn default_config() {
        let config = GeocodeCacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(3600));
        assert_eq!(config.max_capacity, 1000);
    }
}
