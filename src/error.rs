//! Error types for vellum operations.

use thiserror::Error;

/// Errors that can occur at the I/O and serialization edges.
///
/// Rendering and diffing are pure and infallible; errors only arise when
/// reading or writing files and when encoding records as JSON.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
