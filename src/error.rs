//! Error types for zoom, viewport and settings operations.
//!
//! Every failure is local and synchronous: an operation that returns an error
//! has not mutated the value it was called on.

use thiserror::Error;

/// Errors raised by the zoom ledger, the viewport transform and the controller
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// A required input was absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The zoom ledger already holds this level
    #[error("Zoom level {0}% is already present")]
    DuplicateZoomLevel(u32),

    /// Zoom must be a strictly positive, finite percentage
    #[error("Invalid zoom: {0}% (must be strictly positive)")]
    InvalidZoom(f32),

    /// The operation is deliberately unavailable
    #[error("Not supported: {0}")]
    NotSupported(&'static str),

    /// Positional access past the end of the ledger
    #[error("Index {index} out of range ({len} zoom levels)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for view operations
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings parsed but describe an impossible configuration
    #[error("Invalid settings: {0}")]
    Invalid(#[from] ViewError),

    /// Temporary file could not be moved into place
    #[error("Failed to persist settings: {0}")]
    Persist(#[from] tempfile::PersistError),
}
