use std::path::PathBuf;

use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for a `dj` run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("couldn't process '{path}': {source}")]
    FileProcessing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render template '{path}': {source}")]
    Render {
        path: PathBuf,
        source: minijinja::Error,
    },
}
