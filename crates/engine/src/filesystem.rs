use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use crate::filter::PathFilter;
use crossbeam_channel::Sender;
use ignore::{WalkBuilder, WalkState};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// Parallel recursive walk of the filter's source directory.
///
/// Every entry below the root goes through [`PathFilter::keep`]; excluded
/// directories are not descended into. Kept regular files and symlinks are
/// sent on `tx`; sockets, FIFOs and device nodes are skipped.
///
/// # Errors
/// Returns the first filter or traversal error. The walk stops scheduling
/// new work once an error has been seen.
pub fn walk_parallel(
    filter: &Arc<PathFilter>,
    options: &WalkOptions,
    tx: &Sender<PathBuf>,
) -> Result<()> {
    let root = filter.source_dir().to_path_buf();
    if !root.is_dir() {
        return Err(EngineError::Config(format!(
            "Source directory does not exist: {}",
            root.display()
        )));
    }

    let mut builder = WalkBuilder::new(&root);
    // Only the path filter decides; no gitignore or hidden-file handling.
    builder
        .standard_filters(false)
        .threads(options.threads)
        .follow_links(options.follow_links);

    if let Some(depth) = options.max_depth {
        builder.max_depth(Some(depth));
    }

    let failure: Arc<Mutex<Option<EngineError>>> = Arc::new(Mutex::new(None));

    let entry_filter = Arc::clone(filter);
    let entry_failure = Arc::clone(&failure);
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        match entry_filter.keep(entry.path()) {
            Ok(keep) => {
                if !keep {
                    log::trace!("Excluded {}", entry.path().display());
                }
                keep
            }
            Err(err) => {
                record_failure(&entry_failure, err);
                false
            }
        }
    });

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        let failure = Arc::clone(&failure);
        Box::new(move |entry| match entry {
            Ok(entry) => {
                if has_failed(&failure) {
                    return WalkState::Quit;
                }
                if entry.depth() > 0
                    && entry
                        .file_type()
                        .is_some_and(|ft| ft.is_file() || ft.is_symlink())
                {
                    let _ = tx.send(entry.into_path());
                }
                WalkState::Continue
            }
            Err(err) => {
                record_failure(&failure, EngineError::Walk(err));
                WalkState::Quit
            }
        })
    });

    let mut slot = failure.lock().unwrap_or_else(PoisonError::into_inner);
    match slot.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn record_failure(slot: &Mutex<Option<EngineError>>, err: EngineError) {
    let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
    if slot.is_none() {
        *slot = Some(err);
    }
}

fn has_failed(slot: &Mutex<Option<EngineError>>) -> bool {
    slot.lock().unwrap_or_else(PoisonError::into_inner).is_some()
}
