//! Short id generation for the Pinhole URL shortener.

pub mod random;

pub use random::RandomGenerator;

use pinhole_core::ShortId;

/// Trait for generating short ids.
///
/// Implementations are pure generators that don't interact with storage.
/// Uniqueness is statistical, not checked against the existing key space;
/// collision handling on insert belongs to the caller.
pub trait Generator: Send + Sync + 'static {
    /// Generates a fresh short id.
    fn generate(&self) -> ShortId;
}
