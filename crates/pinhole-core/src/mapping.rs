use crate::short_id::ShortId;
use serde::{Deserialize, Serialize};

/// A single id↔URL pairing held by the mapping store.
///
/// A mapping is created exactly once, on the first successful shorten of its
/// URL, and is never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// The short token identifying the shortened URL.
    pub short_id: ShortId,
    /// The full URL the token resolves to.
    pub original_url: String,
}

impl UrlMapping {
    pub fn new(short_id: ShortId, original_url: impl Into<String>) -> Self {
        Self {
            short_id,
            original_url: original_url.into(),
        }
    }
}
