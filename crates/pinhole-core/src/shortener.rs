use crate::error::ShortenError;
use crate::short_id::ShortId;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenError>;

/// The externally visible result of shortening a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    /// The short token identifying the mapping.
    pub short_id: ShortId,
    /// The full short URL, built from the configured base origin.
    pub short_url: String,
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Maps a URL to its short identifier, minting one on first sight.
    ///
    /// Repeated calls with the same URL return the same pairing without
    /// mutating the store or the cache.
    async fn shorten(&self, original_url: &str) -> Result<Shortened>;

    /// Resolves a short id back to its original URL.
    /// Returns `None` if the id is unknown.
    async fn resolve(&self, id: &ShortId) -> Result<Option<String>>;
}
