//! Error types for Catpick
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::TreeSourceError;

/// Result type alias for Catpick operations
pub type CatpickResult<T> = Result<T, CatpickError>;

/// Main error type for Catpick operations
#[derive(Error, Debug)]
pub enum CatpickError {
    /// A tree node is missing a required field (or has it empty)
    #[error("missing required field '{field}' at {location}")]
    MissingField {
        field: &'static str,
        location: String,
    },

    /// The payload is not a valid category tree document
    #[error("invalid category payload: {message}")]
    InvalidPayload { message: String },

    /// A value was used that no node in the tree carries
    #[error("unknown category value '{value}'")]
    UnknownValue { value: String },

    /// A shortcut label could not be resolved to a tree node
    #[error("no category named '{label}' for shortcut")]
    UnknownShortcut { label: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Tree source failure (file missing, unreadable)
    #[error(transparent)]
    Source(#[from] TreeSourceError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
