// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use pack_filter_domain::IgnoreSpec;
use pack_filter_engine::EngineError;
pub use pack_filter_engine::{FilterOptions, FilterOptionsBuilder, WalkOptions, WalkOptionsBuilder};

fn ignore_spec_from_args(patterns: &[String]) -> IgnoreSpec {
    match patterns {
        [] => IgnoreSpec::Unset,
        [single] => IgnoreSpec::Pattern(single.clone()),
        many => IgnoreSpec::Patterns(many.to_vec()),
    }
}

impl TryFrom<&Args> for FilterOptions {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self> {
        if args.name.trim().is_empty() {
            return Err(AppError::Config("--name must not be empty".into()));
        }

        let mut builder = FilterOptionsBuilder::default();
        builder
            .dir(args.dir.clone())
            .name(args.name.clone())
            .ignore(ignore_spec_from_args(&args.ignore))
            .junk(!args.no_junk)
            .prune(args.prune)
            .module_filter(args.module_filter);
        if let Some(out) = &args.out {
            builder.out(out.clone());
        }
        if let Some(tmpdir) = &args.tmpdir {
            builder.tmpdir(tmpdir.clone());
        }
        builder
            .build()
            .map_err(|err| AppError::from(EngineError::from(err)))
    }
}

impl From<&Args> for WalkOptions {
    fn from(args: &Args) -> Self {
        Self {
            threads: args.threads.max(1),
            follow_links: args.follow_links,
            max_depth: args.max_depth,
        }
    }
}
