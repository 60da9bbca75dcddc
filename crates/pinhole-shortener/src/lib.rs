//! Shortener service implementation for the Pinhole URL shortener.
//!
//! This crate composes a mapping store, a lookup cache, and an id generator
//! into the public shorten/resolve operations. Core types and traits are
//! re-exported from `pinhole_core`.

pub mod service;

pub use pinhole_core::{Shortened, ShortenError, Shortener};
pub use service::{ShortenerConfig, ShortenerService};
