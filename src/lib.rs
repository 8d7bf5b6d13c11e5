// Transitive dependencies pull in more than one version of a few crates.
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
