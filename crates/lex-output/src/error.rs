//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory is missing or not a directory.
    #[error("output directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to create a staging file in the output directory.
    #[error("failed to create staging file in {dir}: {source}")]
    Stage {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write CSV content.
    #[error("failed to write {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to flush or close a file.
    #[error("failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to move a staged file into place.
    #[error("failed to persist {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
