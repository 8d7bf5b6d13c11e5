//! Module pruner seam and its per-run cache.
//!
//! Deciding whether a dependency is reachable belongs to the external
//! dependency-pruning engine; this crate only caches and consults it.

use crate::error::Result;
use hashbrown::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

pub trait ModulePruner: Send + Sync {
    /// Whether the module at `module_path` (already symlink-resolved) stays in the bundle.
    fn keep_module(&self, module_path: &Path) -> Result<bool>;
}

/// Keeps every module.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissivePruner;

impl ModulePruner for PermissivePruner {
    fn keep_module(&self, _module_path: &Path) -> Result<bool> {
        Ok(true)
    }
}

pub type PrunerFactory = Arc<dyn Fn(&Path) -> Arc<dyn ModulePruner> + Send + Sync>;

/// Pruners keyed by source directory, owned by a single packaging run.
///
/// Entries are created on first request and never evicted.
pub struct PrunerCache {
    factory: PrunerFactory,
    entries: Mutex<HashMap<PathBuf, Arc<dyn ModulePruner>>>,
}

impl PrunerCache {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&Path) -> Arc<dyn ModulePruner> + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn permissive() -> Self {
        Self::new(|_| Arc::new(PermissivePruner))
    }

    /// Cached pruner for `dir`, constructing it on first request.
    pub fn get(&self, dir: &Path) -> Arc<dyn ModulePruner> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pruner) = entries.get(dir) {
            return Arc::clone(pruner);
        }
        log::debug!("Creating module pruner for {}", dir.display());
        let pruner = (self.factory)(dir);
        entries.insert(dir.to_path_buf(), Arc::clone(&pruner));
        pruner
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PrunerCache {
    fn default() -> Self {
        Self::permissive()
    }
}

impl fmt::Debug for PrunerCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrunerCache")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}
