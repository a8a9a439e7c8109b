//! Error types for the core library

use thiserror::Error;

/// Errors raised while normalizing a stream
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
