//! Error types for resource mappings.

use crate::model::PathError;
use thiserror::Error;

/// Errors that can occur while deriving a resource mapping.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MappingError {
    /// A required construction argument was missing or invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The derived or configured path is not a valid path segment.
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathError),
}
