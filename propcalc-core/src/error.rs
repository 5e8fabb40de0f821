use std::path::PathBuf;

use thiserror::Error;

/// Failure loading configuration or an instrument catalog from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("instrument catalog is empty")]
    EmptyCatalog,
}
