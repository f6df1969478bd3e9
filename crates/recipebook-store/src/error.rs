use std::path::PathBuf;

/// Errors from recipe storage operations.
///
/// Only writes can fail; reads fall back to an empty map instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error while writing the backing file.
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The recipe map could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
