// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "pack-filter",
    version = crate::VERSION,
    about = "List the files an application bundle would copy from a source directory"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Source directory of the application
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Application name (used to derive per-target output directory names)
    #[arg(long)]
    pub name: String,

    /// Output directory of the packager; when omitted every official target directory under the cwd is excluded
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub out: Option<PathBuf>,

    /// Regular expression of paths to leave out (repeatable), matched against `/`-rooted relative paths
    #[arg(long, value_name = "REGEX", help_heading = "Filter")]
    pub ignore: Vec<String>,

    /// Keep OS/editor junk files such as .DS_Store and Thumbs.db
    #[arg(long, help_heading = "Filter")]
    pub no_junk: bool,

    /// Prepare a module pruner for node_modules
    #[arg(long, help_heading = "Filter")]
    pub prune: bool,

    /// Let the pruner decide on node_modules entries
    #[arg(long, requires = "prune", help_heading = "Filter")]
    pub module_filter: bool,

    /// Temp directory root for the packager's scratch space
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub tmpdir: Option<PathBuf>,

    /// Walker threads
    #[arg(long, default_value_t = 1, help_heading = "Walk")]
    pub threads: usize,

    /// Follow symbolic links while walking
    #[arg(long, help_heading = "Walk")]
    pub follow_links: bool,

    /// Maximum walk depth
    #[arg(long, help_heading = "Walk")]
    pub max_depth: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", help_heading = "Output")]
    pub format: OutputFormat,

    /// Debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Errors only on stderr
    #[arg(short, long)]
    pub quiet: bool,
}
