use thiserror::Error;

/// Errors returned by [`MappingStore`](crate::store::MappingStore) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("short id already mapped: {0}")]
    DuplicateShortId(String),
    #[error("url already mapped: {0}")]
    DuplicateUrl(String),
}

/// Errors returned by [`LookupCache`](crate::cache::LookupCache) backends.
///
/// The in-memory backend never fails, but the trait keeps the error channel
/// open for backends that can (network caches, serialization).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
    #[error("cache operation failed: {0}")]
    Operation(String),
}

/// Errors surfaced by the [`Shortener`](crate::shortener::Shortener).
///
/// `DuplicateShortId` never appears here: generator collisions are retried
/// inside the service and exhaustion is reported as [`Unexpected`].
///
/// [`Unexpected`]: ShortenError::Unexpected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShortenError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("url mapping conflict: {0}")]
    Conflict(String),
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}
