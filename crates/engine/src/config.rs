use derive_builder::Builder;
use pack_filter_domain::IgnoreSpec;
use std::path::PathBuf;

/// Filtering-related subset of a packaging run's options.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct FilterOptions {
    /// Source directory; relative-path matching is rooted here.
    pub dir: PathBuf,
    /// Application name used to derive per-target output basenames.
    pub name: String,
    #[builder(default)]
    pub ignore: IgnoreSpec,
    #[builder(default, setter(strip_option, into))]
    pub out: Option<PathBuf>,
    #[builder(default)]
    pub prune: bool,
    #[builder(default = "true")]
    pub junk: bool,
    /// Consult the pruner for `node_modules` entries. Requires `prune`.
    #[builder(default)]
    pub module_filter: bool,
    #[builder(default, setter(strip_option, into))]
    pub tmpdir: Option<PathBuf>,
    /// Working directory the output set is computed against; process cwd when unset.
    #[builder(default, setter(strip_option, into))]
    pub cwd: Option<PathBuf>,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            follow_links: false,
            max_depth: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn builder_applies_defaults() {
        let opts = FilterOptionsBuilder::default()
            .dir("/src")
            .name("myapp")
            .build()
            .unwrap();
        assert!(opts.junk);
        assert!(!opts.prune);
        assert!(!opts.module_filter);
        assert!(opts.out.is_none());
        assert!(matches!(opts.ignore, IgnoreSpec::Unset));
    }

    #[test]
    fn builder_requires_name() {
        let err = FilterOptionsBuilder::default().dir("/src").build();
        assert!(err.is_err());
    }

    #[test]
    fn builder_errors_convert_to_config_error() {
        let err: EngineError = FilterOptionsBuilder::default()
            .dir("/src")
            .build()
            .unwrap_err()
            .into();
        assert!(matches!(err, EngineError::Config(ref msg) if msg.contains("name")));

        let err: EngineError =
            WalkOptionsBuilderError::UninitializedField("threads").into();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn walk_defaults_to_single_thread() {
        let walk = WalkOptionsBuilder::default().build().unwrap();
        assert_eq!(walk.threads, 1);
        assert!(!walk.follow_links);
    }
}
