//! Error types for extraction, generation and removal.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for canvaslift operations.
pub type LiftResult<T> = Result<T, LiftError>;

/// Errors that can occur while lifting a canvas element into a component.
#[derive(Debug, Error)]
pub enum LiftError {
    /// The canvas page path does not resolve to a file.
    #[error("CanvasPage not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// No branch for the requested type, or a branch that never closes.
    #[error("branch not found for {0}")]
    BranchNotFound(String),

    /// The identifier sanitizes to an empty string.
    #[error("Invalid componentId: {0:?}")]
    InvalidIdentifier(String),

    /// The generated definition could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generation service could not be reached.
    #[error("Generation service unavailable at {url}: {reason}")]
    ServiceUnavailable { url: String, reason: String },

    /// The generation service answered, but reported a failure.
    #[error("Generation service error: {0}")]
    Remote(String),

    /// Unexpected I/O fault outside the write path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
