//! Mapping store implementations for the Pinhole URL shortener.

pub mod memory;

pub use memory::InMemoryStore;
