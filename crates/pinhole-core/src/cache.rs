use crate::error::CacheError;
use crate::short_id::ShortId;
use async_trait::async_trait;

/// Type alias for cache results.
pub type Result<T> = std::result::Result<T, CacheError>;

/// A time-bounded read-through accelerator for `short id → original URL`
/// lookups.
///
/// The cache is never a source of truth: every entry must be re-derivable by
/// querying the mapping store, and the store is always consulted on a miss.
/// Entries expire a configured duration after [`set`](LookupCache::set); an
/// absent or expired key is a miss (`Ok(None)`), never an error.
#[async_trait]
pub trait LookupCache: Send + Sync + 'static {
    /// Get the original URL for a short id from the cache.
    async fn get(&self, id: &ShortId) -> Result<Option<String>>;

    /// Store a pairing in the cache.
    async fn set(&self, id: &ShortId, original_url: &str) -> Result<()>;
}
