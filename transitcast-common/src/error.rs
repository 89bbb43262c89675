//! Common error types for transitcast

use thiserror::Error;

/// Common result type for transitcast operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the transitcast crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Factory table could not be loaded or parsed
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Result table could not be written
    #[error("Export error: {0}")]
    Export(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
