//! Error types for the deckmd library.

use std::io;
use thiserror::Error;

/// Result type alias for deckmd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while compiling a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A table fence body could not be parsed as table data.
    ///
    /// Only surfaced in strict mode; lenient mode logs and drops the table.
    #[error("Invalid table data: {0}")]
    TableData(String),

    /// The theme configuration document is malformed.
    #[error("Invalid theme configuration: {0}")]
    Theme(String),

    /// Error reported by an external slide renderer.
    #[error("Rendering error: {0}")]
    Render(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
