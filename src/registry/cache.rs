// src/registry/cache.rs
//! Parsed-dataset cache keyed by source path and content digest.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::loader;
use super::types::Dataset;
use crate::config::RegistryConfig;
use crate::error::Result;

struct Entry {
    digest: [u8; 32],
    config: RegistryConfig,
    dataset: Arc<Dataset>,
}

/// Caller-owned cache of parsed registries.
///
/// The file is re-read on every [`DatasetCache::load`] so that a changed
/// source is detected through its digest; only the parse is skipped.
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, Entry>,
}

impl DatasetCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dataset for `path`, parsing only on a miss.
    ///
    /// # Errors
    /// Propagates loader errors; a failed load leaves any previous entry
    /// for the path untouched.
    pub fn load(&mut self, path: &Path, config: &RegistryConfig) -> Result<Arc<Dataset>> {
        let bytes = loader::read_source(path)?;
        let digest: [u8; 32] = Sha256::digest(&bytes).into();

        if let Some(entry) = self.entries.get(path) {
            if entry.digest == digest && entry.config == *config {
                debug!(path = %path.display(), "registry cache hit");
                return Ok(Arc::clone(&entry.dataset));
            }
        }

        debug!(path = %path.display(), "registry cache miss");
        let dataset = Arc::new(loader::parse_bytes(&bytes, config)?);
        self.entries.insert(
            path.to_path_buf(),
            Entry {
                digest,
                config: config.clone(),
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    /// Drops the entry for `path`. Returns true if one existed.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
