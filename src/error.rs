//! Error types for docstruct library.

use std::io;
use thiserror::Error;

/// Result type alias for docstruct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rebuilding or verifying a document.
///
/// Only malformed input fails an operation. Structural issues and quality
/// warnings found during verification are reported as strings inside the
/// verification report instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON payload could not be parsed or serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The declared page count is negative.
    #[error("Invalid page count: {0}")]
    InvalidPageCount(i64),

    /// An element references a page outside the document.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// The document shape could not be read.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The JSON payload is neither a raw extraction nor a rebuilt document.
    #[error("Unknown input format: expected an element list or a document")]
    UnknownFormat,

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}
