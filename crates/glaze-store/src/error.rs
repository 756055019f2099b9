//! File store error types.

use glaze_cart::StoreError;
use glaze_pricing::PersistError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when using the file store.
#[derive(Error, Debug)]
pub enum FileStoreError {
    /// Failed to open the data directory.
    #[error("Failed to open store at {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read or write a document.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A document could not be decoded.
    #[error("Corrupt document {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A document could not be encoded.
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<FileStoreError> for StoreError {
    fn from(e: FileStoreError) -> Self {
        match e {
            FileStoreError::Io { source, .. } => StoreError::Io(source),
            FileStoreError::Decode { .. } | FileStoreError::Encode(_) => {
                StoreError::Serialization(e.to_string())
            }
            FileStoreError::Open { .. } => StoreError::Unavailable(e.to_string()),
        }
    }
}

impl From<FileStoreError> for PersistError {
    fn from(e: FileStoreError) -> Self {
        PersistError::Unavailable(e.to_string())
    }
}
