//! Memoized dataset loading.
//!
//! Loading one million rows dominates an analysis run, so [`DatasetCache`]
//! keeps each parsed dataset behind an `Arc` and hands it out again while
//! the underlying file is unchanged.
//!
//! # Example
//!
//! ```no_run
//! use adapter_loader::DatasetCache;
//! use std::sync::Arc;
//!
//! let cache = DatasetCache::new();
//! let first = cache.get_or_load("simulacion_riesgo.csv").unwrap();
//! let second = cache.get_or_load("simulacion_riesgo.csv").unwrap();
//!
//! assert!(Arc::ptr_eq(&first, &second));
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::SystemTime;

use risk_core::{Result, RiskError, ScenarioDataset};
use tracing::debug;

use crate::csv_loader::load_dataset;

/// Identity of a dataset file at a point in time.
///
/// Two identities compare equal when the canonical path, modification time
/// and byte length all match. A rewrite that keeps the same length inside
/// the filesystem's timestamp granularity is not detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileIdentity {
    /// Canonicalised path.
    pub path: PathBuf,
    /// Last modification time, if the platform reports one.
    pub modified: Option<SystemTime>,
    /// File length in bytes.
    pub len: u64,
}

impl FileIdentity {
    /// Capture the current identity of `path`.
    ///
    /// # Errors
    ///
    /// [`RiskError::DatasetNotFound`] if the path cannot be resolved to a
    /// regular file.
    pub fn of(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let canonical = fs::canonicalize(path)
            .map_err(|e| RiskError::not_found(path, format!("cannot resolve path: {}", e)))?;
        let metadata = fs::metadata(&canonical)
            .map_err(|e| RiskError::not_found(path, format!("cannot stat file: {}", e)))?;
        if !metadata.is_file() {
            return Err(RiskError::not_found(path, "not a regular file"));
        }

        Ok(Self {
            path: canonical,
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }
}

type Entry = (FileIdentity, Arc<ScenarioDataset>);

/// Thread-safe dataset cache keyed by file identity.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: RwLock<HashMap<PathBuf, Entry>>,
}

impl DatasetCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, loading it on a miss.
    ///
    /// A cached entry is reused only while the file identity is unchanged;
    /// otherwise the file is parsed again and the entry replaced. Parsing
    /// runs without holding the lock, so lookups of other paths proceed
    /// meanwhile.
    ///
    /// # Errors
    ///
    /// Propagates [`load_dataset`] errors. Failed loads are never cached.
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<ScenarioDataset>> {
        self.get_or_load_with(path.as_ref(), |p: &Path| load_dataset(p))
    }

    fn get_or_load_with<F>(&self, path: &Path, load: F) -> Result<Arc<ScenarioDataset>>
    where
        F: FnOnce(&Path) -> Result<ScenarioDataset>,
    {
        let identity = FileIdentity::of(path)?;

        // Fast path: read lock check
        {
            let entries = self.read();
            if let Some((cached, dataset)) = entries.get(&identity.path) {
                if *cached == identity {
                    debug!(path = %identity.path.display(), "Dataset cache hit");
                    return Ok(Arc::clone(dataset));
                }
                debug!(path = %identity.path.display(), "Dataset file changed, reloading");
            }
        }

        let dataset = Arc::new(load(path)?);

        // The file may have been rewritten while it was parsed.
        if FileIdentity::of(path)? != identity {
            debug!(path = %identity.path.display(), "Dataset changed during load, not cached");
            return Ok(dataset);
        }

        // Another thread may have loaded the same file meanwhile.
        let mut entries = self.write();
        if let Some((cached, existing)) = entries.get(&identity.path) {
            if *cached == identity {
                return Ok(Arc::clone(existing));
            }
        }
        entries.insert(identity.path.clone(), (identity, Arc::clone(&dataset)));
        Ok(dataset)
    }

    /// Drop the entry for `path`. Returns whether an entry was present.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.write().remove(&key).is_some()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Number of cached datasets.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the cache holds no datasets.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written entry, so
    // a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<PathBuf, Entry>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<PathBuf, Entry>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}
