use async_trait::async_trait;
use parking_lot::RwLock;
use pinhole_core::store::{InsertOutcome, MappingStore, Result};
use pinhole_core::{ShortId, StoreError, UrlMapping};
use std::collections::HashMap;
use tracing::{debug, trace};

#[derive(Debug, Default)]
struct Indexes {
    by_short_id: HashMap<String, String>,
    by_original_url: HashMap<String, String>,
}

/// In-memory implementation of the [`MappingStore`] trait.
///
/// Both indices live behind a single `RwLock` so every insert updates them in
/// one critical section: a reader can never observe one index without the
/// other, and a rejected insert mutates neither. No operation holds the lock
/// across an await point.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    indexes: RwLock<Indexes>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new store with the specified index capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indexes: RwLock::new(Indexes {
                by_short_id: HashMap::with_capacity(capacity),
                by_original_url: HashMap::with_capacity(capacity),
            }),
        }
    }

    /// Number of mappings currently stored.
    pub fn len(&self) -> usize {
        self.indexes.read().by_short_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(mapping: &UrlMapping) -> Result<()> {
        if mapping.short_id.is_empty() {
            return Err(StoreError::InvalidArgument(
                "short id must not be empty".to_string(),
            ));
        }
        if mapping.original_url.is_empty() {
            return Err(StoreError::InvalidArgument(
                "original url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    // Caller must hold the write lock; both maps are updated or neither.
    fn insert_into(indexes: &mut Indexes, mapping: UrlMapping) {
        let id = mapping.short_id.as_str().to_owned();
        indexes
            .by_original_url
            .insert(mapping.original_url.clone(), id.clone());
        indexes.by_short_id.insert(id, mapping.original_url);
    }
}

#[async_trait]
impl MappingStore for InMemoryStore {
    async fn insert(&self, mapping: UrlMapping) -> Result<()> {
        Self::validate(&mapping)?;

        let mut indexes = self.indexes.write();

        if indexes.by_short_id.contains_key(mapping.short_id.as_str()) {
            return Err(StoreError::DuplicateShortId(mapping.short_id.to_string()));
        }
        if indexes.by_original_url.contains_key(&mapping.original_url) {
            return Err(StoreError::DuplicateUrl(mapping.original_url));
        }

        debug!(id = %mapping.short_id, url = %mapping.original_url, "inserting mapping");
        Self::insert_into(&mut indexes, mapping);
        Ok(())
    }

    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<InsertOutcome> {
        Self::validate(&mapping)?;

        let mut indexes = self.indexes.write();

        // The existence check and the insert happen under one write lock;
        // of any number of racing callers for a URL, exactly one inserts.
        if let Some(existing) = indexes.by_original_url.get(&mapping.original_url) {
            trace!(url = %mapping.original_url, id = %existing, "url already mapped");
            return Ok(InsertOutcome::Existing(ShortId::new(existing.clone())));
        }
        if indexes.by_short_id.contains_key(mapping.short_id.as_str()) {
            return Err(StoreError::DuplicateShortId(mapping.short_id.to_string()));
        }

        debug!(id = %mapping.short_id, url = %mapping.original_url, "inserting mapping");
        Self::insert_into(&mut indexes, mapping);
        Ok(InsertOutcome::Inserted)
    }

    async fn get_by_short_id(&self, id: &ShortId) -> Result<Option<String>> {
        Ok(self.indexes.read().by_short_id.get(id.as_str()).cloned())
    }

    async fn get_by_original_url(&self, url: &str) -> Result<Option<ShortId>> {
        Ok(self
            .indexes
            .read()
            .by_original_url
            .get(url)
            .cloned()
            .map(ShortId::new))
    }
}
