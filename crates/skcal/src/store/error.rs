//! Error types for loading and saving calendar data.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::DayKey;

/// Errors that occur while building a [`DateFactStore`](super::DateFactStore).
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File I/O error when reading a calendar data file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed data with location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The same day appears more than once.
    #[error("{path}: duplicate entry for day {key}")]
    DuplicateDay { path: PathBuf, key: DayKey },
}

/// Errors that occur while writing calendar data.
#[derive(Debug, Error)]
pub enum DataSaveError {
    /// File I/O error when writing a calendar data file.
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table could not be encoded.
    #[error("failed to encode calendar data: {0}")]
    Encode(#[from] serde_json::Error),
}
