//! Shared error type for configuration and I/O failures.
//!
//! The scheduler, loaders, and writers define their own error enums; this one
//! covers what every crate can hit before a run starts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `cs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
