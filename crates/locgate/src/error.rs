//! Error types for locgate.
//!
//! Only configuration loading can fail. The filter path itself recovers from
//! every collaborator failure and never returns an error to the host.

use thiserror::Error;

/// Errors that can occur while setting up a [`FilterBinder`](crate::FilterBinder).
#[derive(Debug, Error)]
pub enum LocgateError {
    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid JSON for [`FilterConfig`](crate::FilterConfig).
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for locgate operations.
pub type Result<T> = std::result::Result<T, LocgateError>;
