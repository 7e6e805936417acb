//! Dataset loading error types.
//!
//! Lookups themselves never fail; only reading a dataset document can.

use thiserror::Error;

/// Errors that can occur while loading a dataset document.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for dataset loading results.
pub type DatasetResult<T> = Result<T, DatasetError>;
