//! Common error types for Sentinel

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for Sentinel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Sentinel crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact file could not be read
    #[error("Failed to read artifact {path}: {source}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON for its schema
    #[error("Failed to parse artifact {path}: {source}")]
    ArtifactParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact parsed but its contents are unusable
    #[error("Invalid artifact: {0}")]
    Artifact(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Vectorization failed for a document
    #[error("Vectorization error: {0}")]
    Vectorize(String),

    /// Classification failed for a feature vector
    #[error("Classification error: {0}")]
    Classify(String),
}
