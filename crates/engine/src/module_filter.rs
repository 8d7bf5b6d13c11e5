//! Dependency-aware decision step for `node_modules` entries.
//!
//! Disabled unless both `prune` and `module_filter` are set. It only runs
//! after the pattern matcher kept a path, so it can narrow but never widen
//! the result.

use crate::error::Result;
use crate::pruner::ModulePruner;
use pack_filter_shared_kernel::{normalize_lexically, resolve_against};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const MODULES_PREFIX: &str = "/node_modules/";

pub trait ModuleFilter: Send + Sync {
    /// `Some(keep)` when this step owns the decision, `None` to defer.
    fn decide(&self, full_path: &Path, rooted_relative: &str) -> Result<Option<bool>>;
}

pub struct PrunerModuleFilter {
    pruner: Arc<dyn ModulePruner>,
}

impl PrunerModuleFilter {
    pub fn new(pruner: Arc<dyn ModulePruner>) -> Self {
        Self { pruner }
    }
}

impl ModuleFilter for PrunerModuleFilter {
    fn decide(&self, full_path: &Path, rooted_relative: &str) -> Result<Option<bool>> {
        if !rooted_relative.starts_with(MODULES_PREFIX) || !is_module(full_path) {
            return Ok(None);
        }
        let resolved = resolve_module_path(full_path);
        let keep = self.pruner.keep_module(&resolved)?;
        if !keep {
            log::debug!("Pruned module {}", resolved.display());
        }
        Ok(Some(keep))
    }
}

/// A module is a directory carrying a `package.json`.
pub fn is_module(path: &Path) -> bool {
    path.join("package.json").is_file()
}

/// Follow a symlinked module one hop; plain paths are only normalized.
pub fn resolve_module_path(path: &Path) -> PathBuf {
    match std::fs::read_link(path) {
        Ok(target) => {
            let parent = path.parent().unwrap_or(Path::new("/"));
            resolve_against(parent, &target)
        }
        Err(_) => normalize_lexically(path),
    }
}
