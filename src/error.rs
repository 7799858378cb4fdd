// Error types for the aocache library.
// Covers HTTP transport failures, non-success responses, and cache filesystem errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication failed: invalid or expired session cookie")]
    Unauthorized,

    #[error("no puzzle input at {0}")]
    NotFound(String),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("no cached input at {}", .path.display())]
    MissingCache { path: PathBuf },

    #[error("non-ASCII data in input {}", .path.display())]
    Encoding { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
