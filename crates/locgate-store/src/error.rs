//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Location not found.
    #[error("location not found: {0}")]
    NotFound(String),

    /// A location with this UUID already exists.
    #[error("duplicate location uuid: {0}")]
    DuplicateUuid(String),

    /// A location with this integer key already exists.
    #[error("duplicate location id: {0}")]
    DuplicateId(i64),

    /// The backing store could not be reached.
    #[error("registry unavailable: {0}")]
    Unavailable(String),

    /// A lock was poisoned by a panicking writer.
    #[error("registry lock poisoned")]
    Poisoned,
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
