use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::LoadError;
use super::loader::load;
use super::model::ListingTable;

// ---------------------------------------------------------------------------
// Per-source memo of loaded tables
// ---------------------------------------------------------------------------

/// Process-local cache of normalized tables, keyed by canonical source path.
///
/// Sources are treated as immutable for the session, so entries are never
/// invalidated. Failed loads are not stored and will be retried.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, Arc<ListingTable>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `path`, reading it on first use.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<ListingTable>, LoadError> {
        let key = path.canonicalize().map_err(|e| LoadError::io(path, e))?;

        if let Some(table) = self.entries.get(&key) {
            log::debug!("Cache hit for {}", key.display());
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(load(&key)?);
        self.entries.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// Whether `path` has already been loaded successfully.
    pub fn contains(&self, path: &Path) -> bool {
        path.canonicalize()
            .map(|key| self.entries.contains_key(&key))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
