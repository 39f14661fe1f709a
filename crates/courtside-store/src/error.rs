//! Error types for the storage layer.

use std::path::PathBuf;

/// Errors that can occur while reading or writing client storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The snapshot could not be read from or written to disk.
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be serialized.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
