//! Local store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::traits::LocalStore`] implementations.
///
/// A predicate that matches nothing is not an error; it reports zero
/// affected rows.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("Store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded or decoded.
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A row was inserted without a column the collection requires.
    #[error("Missing required column '{column}' for {collection}")]
    MissingColumn {
        collection: &'static str,
        column: &'static str,
    },
}

impl StoreError {
    /// Build an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short error code for structured logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Io { .. } => "E_STORE_IO",
            StoreError::Serialization(_) => "E_STORE_SERDE",
            StoreError::MissingColumn { .. } => "E_STORE_COLUMN",
        }
    }
}
