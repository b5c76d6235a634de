//! Core error types for studyflow-core.
//!
//! Only contract violations surface to the caller (a malformed import
//! payload, an unreadable config file). Recoverable conditions -- corrupt
//! persisted state, failed durable writes -- are absorbed at the store
//! boundary and never propagate.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage backend errors
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An import payload that is not a valid planner document.
    /// The in-memory document is left unchanged when this is returned.
    #[error("invalid import payload: {0}")]
    Import(#[source] serde_json::Error),

    /// Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage-backend errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The per-user data directory could not be resolved or created
    #[error("failed to prepare data directory: {0}")]
    DataDir(String),

    /// Writing a key failed
    #[error("failed to write key '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Removing a key failed
    #[error("failed to remove key '{key}': {source}")]
    RemoveFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
