//! Core types and traits for the Pinhole URL shortener.
//!
//! This crate provides the shared vocabulary used by the store, cache,
//! generator, and shortener crates: the [`ShortId`] token, the
//! [`UrlMapping`] record, the component traits, and the error taxonomy.

pub mod cache;
pub mod error;
pub mod mapping;
pub mod short_id;
pub mod shortener;
pub mod store;

pub use cache::LookupCache;
pub use error::{CacheError, ShortenError, StoreError};
pub use mapping::UrlMapping;
pub use short_id::ShortId;
pub use shortener::{Shortened, Shortener};
pub use store::{InsertOutcome, MappingStore};
