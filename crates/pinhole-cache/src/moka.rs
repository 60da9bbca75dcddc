use async_trait::async_trait;
use moka::future::Cache;
use pinhole_core::cache::{LookupCache, Result};
use pinhole_core::ShortId;
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Default entry lifetime, measured from the time of `set`.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Default maximum number of cached pairings.
pub const DEFAULT_CAPACITY: u64 = 10_000;

/// An in-memory lookup cache backed by Moka.
///
/// Holds only `short id → original URL` entries. Expiry is enforced by the
/// cache itself on the read side; an expired entry is a miss, never an error.
#[derive(Debug, Clone)]
pub struct MokaLookupCache {
    cache: Cache<String, String>,
}

impl MokaLookupCache {
    /// Creates a cache with the default TTL (24 hours) and capacity.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    /// Creates a cache whose entries expire after `ttl` from insertion.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries the cache can hold
    /// * `ttl` - Time-to-live for cache entries
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    /// Returns a builder for creating a custom cache configuration.
    pub fn builder() -> CacheConfigBuilder {
        CacheConfig::builder()
    }
}

impl Default for MokaLookupCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LookupCache for MokaLookupCache {
    async fn get(&self, id: &ShortId) -> Result<Option<String>> {
        trace!(id = %id, "fetching url from lookup cache");

        let key = id.as_str().to_string();
        match self.cache.get(&key).await {
            Some(url) => {
                debug!(id = %id, "cache hit");
                Ok(Some(url))
            }
            None => {
                trace!(id = %id, "cache miss");
                Ok(None)
            }
        }
    }

    async fn set(&self, id: &ShortId, original_url: &str) -> Result<()> {
        trace!(id = %id, "storing url in lookup cache");

        let key = id.as_str().to_string();
        self.cache.insert(key, original_url.to_string()).await;
        Ok(())
    }
}

/// Configuration for creating a [`MokaLookupCache`] with custom settings.
#[derive(Debug, TypedBuilder)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold.
    #[builder(default = DEFAULT_CAPACITY)]
    max_capacity: u64,
    /// Time-to-live for cache entries.
    #[builder(default = DEFAULT_TTL)]
    ttl: Duration,
}

impl From<CacheConfig> for MokaLookupCache {
    fn from(config: CacheConfig) -> Self {
        MokaLookupCache::with_ttl(config.max_capacity, config.ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ShortId {
        ShortId::new(s)
    }

    #[tokio::test]
    async fn cache_get_and_set() {
        let cache = MokaLookupCache::new();
        let c = id("ab12CD34");

        // Initially empty
        assert!(cache.get(&c).await.unwrap().is_none());

        cache.set(&c, "https://example.com").await.unwrap();

        let result = cache.get(&c).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn absent_key_is_miss_not_error() {
        let cache = MokaLookupCache::new();

        let result = cache.get(&id("doesnotexist")).await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let cache = MokaLookupCache::with_ttl(100, Duration::from_millis(50));
        let c = id("ab12CD34");

        cache.set(&c, "https://example.com").await.unwrap();
        assert!(cache.get(&c).await.unwrap().is_some());

        // Wait for TTL to expire
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.get(&c).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_overwrites_existing_entry() {
        let cache = MokaLookupCache::new();
        let c = id("ab12CD34");

        cache.set(&c, "https://old.example").await.unwrap();
        cache.set(&c, "https://new.example").await.unwrap();

        let result = cache.get(&c).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://new.example"));
    }

    #[tokio::test]
    async fn cache_handles_many_entries() {
        let cache = MokaLookupCache::with_ttl(100, DEFAULT_TTL);

        for i in 0..50 {
            let c = id(&format!("code{}", i));
            cache
                .set(&c, &format!("https://example{}", i))
                .await
                .unwrap();
        }

        assert_eq!(
            cache.get(&id("code0")).await.unwrap().as_deref(),
            Some("https://example0")
        );
        assert_eq!(
            cache.get(&id("code25")).await.unwrap().as_deref(),
            Some("https://example25")
        );
        assert_eq!(
            cache.get(&id("code49")).await.unwrap().as_deref(),
            Some("https://example49")
        );
    }

    #[tokio::test]
    async fn cache_builder_pattern() {
        let cache: MokaLookupCache = MokaLookupCache::builder()
            .max_capacity(1000)
            .ttl(Duration::from_secs(60))
            .build()
            .into();

        let c = id("ab12CD34");
        cache.set(&c, "https://example.com").await.unwrap();
        assert!(cache.get(&c).await.unwrap().is_some());
    }
}
