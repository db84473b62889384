//! Shared error definitions for request validation.

use thiserror::Error;

/// Result alias for request validation.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Reasons an inbound request is rejected before any generation happens.
///
/// Display strings double as the client-facing error messages, so they are
/// kept stable.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One of the required fields is absent or empty.
    #[error("Lesson plan and Bloom's Taxonomy level are required")]
    MissingField,

    /// The supplied level is not one of the six canonical names.
    #[error("Invalid Bloom's Taxonomy level")]
    UnknownLevel,
}
