use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that terminate an operation.
///
/// Malformed record lines are not errors; readers skip and count them.
#[derive(Debug, Error)]
pub enum XyzError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse parameter file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, XyzError>;
