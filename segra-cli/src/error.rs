//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input is not valid UTF-8 and strict decoding was requested
    #[error("Invalid UTF-8 in {path} at byte {position}")]
    InvalidUtf8 {
        /// File containing the invalid sequence
        path: String,
        /// Byte offset of the first invalid sequence
        position: usize,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
