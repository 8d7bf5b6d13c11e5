use crate::config::{FilterOptionsBuilderError, WalkOptionsBuilderError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Pruner failed on '{path}': {reason}")]
    Prune { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<FilterOptionsBuilderError> for EngineError {
    fn from(err: FilterOptionsBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<WalkOptionsBuilderError> for EngineError {
    fn from(err: WalkOptionsBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
