use async_trait::async_trait;
use pinhole_core::store::InsertOutcome;
use pinhole_core::{
    LookupCache, MappingStore, ShortId, ShortenError, Shortened, Shortener, StoreError, UrlMapping,
};
use pinhole_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

/// Configuration for a [`ShortenerService`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerConfig {
    /// Base origin used to build the externally visible short URL.
    #[builder(setter(into))]
    pub base_url: String,
    /// How many generator draws to attempt when a candidate id collides.
    #[builder(default = 5)]
    pub max_generate_attempts: usize,
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service composes a `MappingStore`, a `LookupCache`, and a
/// `Generator` into the public shorten/resolve operations. The store is the
/// single source of truth; the cache is populated only after the store has
/// accepted a mapping, and generator collisions are retried here rather than
/// surfaced to the caller.
#[derive(Debug, Clone)]
pub struct ShortenerService<S, C, G> {
    store: Arc<S>,
    cache: Arc<C>,
    generator: Arc<G>,
    config: ShortenerConfig,
}

impl<S: MappingStore, C: LookupCache, G: Generator> ShortenerService<S, C, G> {
    /// Creates a new `ShortenerService` from its three components.
    pub fn new(store: S, cache: C, generator: G, config: ShortenerConfig) -> Self {
        Self {
            store: Arc::new(store),
            cache: Arc::new(cache),
            generator: Arc::new(generator),
            config,
        }
    }

    /// Returns a reference to the mapping store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the lookup cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    fn shortened(&self, short_id: ShortId) -> Shortened {
        let short_url = short_id.to_url(&self.config.base_url);
        Shortened {
            short_id,
            short_url,
        }
    }

    // A failed cache write must not fail the request: the store already
    // holds the mapping and the next resolve repopulates the entry.
    async fn populate_cache(&self, id: &ShortId, url: &str) {
        if let Err(e) = self.cache.set(id, url).await {
            warn!(id = %id, error = %e, "failed to populate lookup cache");
        }
    }
}

#[async_trait]
impl<S: MappingStore, C: LookupCache, G: Generator> Shortener for ShortenerService<S, C, G> {
    async fn shorten(&self, original_url: &str) -> Result<Shortened, ShortenError> {
        if original_url.is_empty() {
            return Err(ShortenError::InvalidUrl("url cannot be empty".to_string()));
        }

        // The URL may already be mapped; repeated shortens return the
        // existing pairing without minting or writing anything.
        if let Some(existing) = self
            .store
            .get_by_original_url(original_url)
            .await
            .map_err(store_to_shorten_error)?
        {
            trace!(url = %original_url, id = %existing, "url already shortened");
            return Ok(self.shortened(existing));
        }

        for attempt in 1..=self.config.max_generate_attempts {
            let candidate = self.generator.generate();
            let mapping = UrlMapping::new(candidate.clone(), original_url);

            match self.store.insert_if_absent(mapping).await {
                Ok(InsertOutcome::Inserted) => {
                    debug!(url = %original_url, id = %candidate, "minted short id");
                    self.populate_cache(&candidate, original_url).await;
                    return Ok(self.shortened(candidate));
                }
                Ok(InsertOutcome::Existing(id)) => {
                    // A concurrent caller mapped this URL first; its id is
                    // the canonical one.
                    trace!(url = %original_url, id = %id, "lost shorten race");
                    return Ok(self.shortened(id));
                }
                Err(StoreError::DuplicateShortId(_)) => {
                    debug!(id = %candidate, attempt, "candidate id collided, retrying");
                }
                Err(e) => return Err(store_to_shorten_error(e)),
            }
        }

        Err(ShortenError::Unexpected(format!(
            "could not mint a unique short id in {} attempts",
            self.config.max_generate_attempts
        )))
    }

    async fn resolve(&self, id: &ShortId) -> Result<Option<String>, ShortenError> {
        trace!(id = %id, "resolving short id");

        match self.cache.get(id).await {
            Ok(Some(url)) => {
                debug!(id = %id, "resolved from cache");
                return Ok(Some(url));
            }
            Ok(None) => {}
            Err(e) => {
                warn!(id = %id, error = %e, "cache read failed, falling back to store");
            }
        }

        match self
            .store
            .get_by_short_id(id)
            .await
            .map_err(store_to_shorten_error)?
        {
            Some(url) => {
                debug!(id = %id, "resolved from store");
                self.populate_cache(id, &url).await;
                Ok(Some(url))
            }
            None => {
                trace!(id = %id, "short id not found");
                Ok(None)
            }
        }
    }
}

/// Converts a `StoreError` to a `ShortenError`.
///
/// `DuplicateShortId` is recovered by the retry loop and only lands here if
/// that loop let one through, which is a bug worth surfacing loudly.
fn store_to_shorten_error(e: StoreError) -> ShortenError {
    match e {
        StoreError::InvalidArgument(msg) => ShortenError::InvalidUrl(msg),
        StoreError::DuplicateUrl(url) => ShortenError::Conflict(url),
        StoreError::DuplicateShortId(id) => {
            ShortenError::Unexpected(format!("unhandled short id collision: {id}"))
        }
    }
}
