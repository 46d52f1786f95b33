// src/registry/mod.rs
//! Registry loading: decoding, CSV parsing, normalization and caching.

pub mod cache;
pub mod fields;
pub mod loader;
pub mod types;

pub use cache::DatasetCache;
pub use loader::load;
pub use types::{Dataset, Individual};
