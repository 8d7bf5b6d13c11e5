// crates/engine/src/lib.rs
use std::path::PathBuf;
use std::sync::Arc;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod filter;
pub mod matcher;
pub mod module_filter;
pub mod normalize;
pub mod out_dirs;
pub mod pruner;

pub use config::{FilterOptions, FilterOptionsBuilder, WalkOptions, WalkOptionsBuilder};
pub use error::{EngineError, Result};
pub use filter::{PathFilter, build_filter};
pub use normalize::{EffectiveIgnore, NormalizedIgnore, normalize};
pub use pruner::{ModulePruner, PermissivePruner, PrunerCache};

/// Outcome of a filtered walk over the source directory.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub source_dir: PathBuf,
    /// Sorted kept entries (absolute paths).
    pub kept: Vec<PathBuf>,
    /// Sorted output directories excluded for this run.
    pub ignored_output_dirs: Vec<PathBuf>,
}

/// Build the filter for `options` and walk the source directory with it.
///
/// # Errors
///
/// Returns the first filter, pattern, or traversal error.
pub fn run(options: &FilterOptions, walk: &WalkOptions, pruners: &PrunerCache) -> Result<RunResult> {
    let filter = Arc::new(build_filter(options, pruners)?);
    log::info!("Filtering {}", filter.source_dir().display());

    let (tx, rx) = crossbeam_channel::bounded(1024);
    let mut kept = std::thread::scope(|scope| -> Result<Vec<PathBuf>> {
        let walk_filter = &filter;
        let walker = scope.spawn(move || filesystem::walk_parallel(walk_filter, walk, &tx));
        let kept: Vec<PathBuf> = rx.iter().collect();
        walker
            .join()
            .map_err(|_| EngineError::Config("walker thread panicked".into()))?
            .map(|()| kept)
    })?;
    kept.sort();

    let mut ignored_output_dirs: Vec<PathBuf> =
        filter.ignored_output_dirs().iter().cloned().collect();
    ignored_output_dirs.sort();

    log::info!("Kept {} entries", kept.len());
    Ok(RunResult {
        source_dir: filter.source_dir().to_path_buf(),
        kept,
        ignored_output_dirs,
    })
}
