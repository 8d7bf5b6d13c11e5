//! Per-entry keep/exclude decision for the bundle copy walk.

use crate::config::FilterOptions;
use crate::error::{EngineError, Result};
use crate::matcher::Matcher;
use crate::module_filter::{ModuleFilter, PrunerModuleFilter};
use crate::normalize::{NormalizedIgnore, normalize};
use crate::out_dirs::ignored_output_dirs;
use crate::pruner::{ModulePruner, PrunerCache};
use hashbrown::HashSet;
use pack_filter_domain::{HostPlatform, base_temp_dir, is_junk};
use pack_filter_shared_kernel::{resolve_against, rooted_relative};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Composed filter. Decisions depend only on the path and state captured at
/// construction, so one instance may be shared across walker threads.
pub struct PathFilter {
    source_dir: PathBuf,
    cwd: PathBuf,
    ignored_out_dirs: HashSet<PathBuf>,
    junk: bool,
    matcher: Matcher,
    pruner: Option<Arc<dyn ModulePruner>>,
    module_filter: Option<Box<dyn ModuleFilter>>,
}

impl PathFilter {
    /// # Errors
    /// Fails when `options.cwd` is unset and the process cwd cannot be read.
    pub fn new(
        options: &FilterOptions,
        ignore: &NormalizedIgnore,
        pruners: &PrunerCache,
    ) -> Result<Self> {
        let cwd = match &options.cwd {
            Some(cwd) => resolve_against(Path::new("/"), cwd),
            None => std::env::current_dir().map_err(|source| EngineError::Io {
                path: PathBuf::from("."),
                source,
            })?,
        };
        let source_dir = resolve_against(&cwd, &options.dir);
        let ignored_out_dirs = ignored_output_dirs(options.out.as_deref(), &options.name, &cwd);
        let matcher = Matcher::new(&ignore.effective);

        let pruner = options.prune.then(|| pruners.get(&source_dir));
        let module_filter = match (&pruner, options.module_filter) {
            (Some(pruner), true) => {
                Some(Box::new(PrunerModuleFilter::new(Arc::clone(pruner))) as Box<dyn ModuleFilter>)
            }
            (None, true) => {
                log::warn!("module filtering requested without pruning; ignoring");
                None
            }
            _ => None,
        };

        Ok(Self {
            source_dir,
            cwd,
            ignored_out_dirs,
            junk: options.junk,
            matcher,
            pruner,
            module_filter,
        })
    }

    /// Replace the module step, e.g. with a custom strategy.
    #[must_use]
    pub fn with_module_filter(mut self, module_filter: Option<Box<dyn ModuleFilter>>) -> Self {
        self.module_filter = module_filter;
        self
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn ignored_output_dirs(&self) -> &HashSet<PathBuf> {
        &self.ignored_out_dirs
    }

    /// Pruner constructed for this run, if pruning is enabled.
    pub fn pruner(&self) -> Option<&Arc<dyn ModulePruner>> {
        self.pruner.as_ref()
    }

    /// `true` to copy `file`, `false` to leave it out.
    ///
    /// # Errors
    /// Propagates malformed ignore patterns and pruner failures.
    pub fn keep(&self, file: &Path) -> Result<bool> {
        let full_path = resolve_against(&self.cwd, file);

        if self.ignored_out_dirs.contains(&full_path) {
            return Ok(false);
        }

        if self.junk
            && full_path
                .file_name()
                .is_some_and(|name| is_junk(&name.to_string_lossy()))
        {
            return Ok(false);
        }

        let relative = rooted_relative(&self.source_dir, &full_path);
        if !self.matcher.keeps(&relative)? {
            return Ok(false);
        }

        if let Some(module_filter) = &self.module_filter
            && let Some(keep) = module_filter.decide(&full_path, &relative)?
        {
            return Ok(keep);
        }

        Ok(true)
    }
}

/// Normalize `options.ignore` for the current host and build the filter.
///
/// # Errors
/// See [`PathFilter::new`].
pub fn build_filter(options: &FilterOptions, pruners: &PrunerCache) -> Result<PathFilter> {
    let ignore = normalize(
        options.ignore.clone(),
        HostPlatform::current(),
        &base_temp_dir(options.tmpdir.as_deref()),
    );
    PathFilter::new(options, &ignore, pruners)
}
