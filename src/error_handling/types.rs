//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for the key-value store.
///
/// Only the store itself can fail. Values that are present but malformed are
/// not errors: readers fall back to defaults.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the store file failed.
    #[error("Store I/O error for {}: {source}", .path.display())]
    Io {
        /// Store file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The store file is not valid JSON.
    #[error("Store {} is not valid JSON: {source}", .path.display())]
    Corrupt {
        /// Store file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The store file holds JSON, but not an object at the top level.
    #[error("Store {} must contain a JSON object", .0.display())]
    NotAnObject(PathBuf),

    /// A value could not be serialized for writing.
    #[error("Failed to serialize value for key {key}: {source}")]
    Serialize {
        /// Store key
        key: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}
