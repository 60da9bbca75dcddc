use crate::error::StoreError;
use crate::mapping::UrlMapping;
use crate::short_id::ShortId;
use async_trait::async_trait;

/// Type alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Outcome of an [`insert_if_absent`](MappingStore::insert_if_absent) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The mapping was inserted; the candidate short id is now canonical.
    Inserted,
    /// The URL was already mapped. Carries the canonical short id; nothing
    /// was mutated.
    Existing(ShortId),
}

/// The authoritative bidirectional dictionary of id↔URL mappings.
///
/// Implementations keep a forward (id → URL) and a reverse (URL → id) index
/// that are always mirror images of each other: a reader must never observe
/// one index updated without the other.
#[async_trait]
pub trait MappingStore: Send + Sync + 'static {
    /// Inserts a new mapping, updating both indices together.
    ///
    /// Fails with [`StoreError::InvalidArgument`] if either value is empty,
    /// [`StoreError::DuplicateShortId`] if the id is already indexed, and
    /// [`StoreError::DuplicateUrl`] if the URL is. A failed insert leaves
    /// both indices untouched.
    async fn insert(&self, mapping: UrlMapping) -> Result<()>;

    /// Check-and-insert keyed by the original URL, atomic as a whole.
    ///
    /// If the URL is already mapped, the canonical short id is returned and
    /// nothing is mutated. Of any number of concurrent callers for one URL,
    /// exactly one observes [`InsertOutcome::Inserted`]; the rest observe
    /// that caller's id.
    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<InsertOutcome>;

    /// Retrieves the original URL for a short id.
    /// Returns `None` if the id is not indexed.
    async fn get_by_short_id(&self, id: &ShortId) -> Result<Option<String>>;

    /// Retrieves the short id for an original URL.
    /// Returns `None` if the URL is not indexed.
    async fn get_by_original_url(&self, url: &str) -> Result<Option<ShortId>>;
}
