//! Error types for lexicon ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the source lexicon.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("input JSON file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Data Format Errors ===
    /// The input is not valid UTF-8.
    #[error("invalid UTF-8 in {path} at line {line}: {source}")]
    InvalidEncoding {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    /// A line is not valid JSON.
    #[error("invalid JSON in {path} at line {line}: {source}")]
    InvalidJson {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A line is valid JSON but not an object.
    #[error("expected a JSON object in {path} at line {line}")]
    NotAnObject { path: PathBuf, line: usize },

    /// A record is missing a required field or has a field of the wrong type.
    #[error("invalid record in {path} at line {line}: {source}")]
    InvalidRecord {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// No record in the file carries a required field.
    #[error("required field '{field}' not found in any record of {path}")]
    MissingColumn { field: &'static str, path: PathBuf },
}

impl IngestError {
    /// True for errors caused by the content of the input rather than by the
    /// file system.
    pub fn is_data_format(&self) -> bool {
        !matches!(self, Self::InputNotFound { .. } | Self::FileRead { .. })
    }

    /// 1-based line number of the offending record, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidEncoding { line, .. }
            | Self::InvalidJson { line, .. }
            | Self::NotAnObject { line, .. }
            | Self::InvalidRecord { line, .. } => Some(*line),
            Self::InputNotFound { .. } | Self::FileRead { .. } | Self::MissingColumn { .. } => {
                None
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
