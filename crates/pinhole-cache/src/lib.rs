//! Lookup cache implementations for the Pinhole URL shortener.

pub mod moka;

pub use crate::moka::{CacheConfig, MokaLookupCache};
