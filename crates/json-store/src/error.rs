//! Error types for JSON document storage.

use std::path::PathBuf;

/// Errors produced while reading or writing JSON documents.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("top level of {} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("failed to open {} for writing: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("key \"{0}\" does not hold an array")]
    NotAnArray(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
