//! Rejection taxonomy for comparison requests

use thiserror::Error;

/// Why a comparison request was turned away instead of producing a diff.
///
/// The `Display` text is the user-facing message; `status` maps each
/// variant onto the HTTP status the host should answer with.
#[derive(Debug, Error)]
pub enum Rejection {
    /// The request tail does not match `/<run number>/<path>`.
    #[error("Malformed url")]
    MalformedRequest,

    /// The artifact path contains a `../` traversal segment.
    #[error("Illegal file path")]
    IllegalPath,

    /// No run with the requested number exists in the job history.
    #[error("No such run")]
    RunNotFound,

    /// The artifact vanished between diffing and writing the response body.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Host data broke an invariant this crate relies on; the message
    /// is diagnostic, not user-facing.
    #[error("{0}")]
    InvariantViolation(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl Rejection {
    pub fn status(&self) -> u16 {
        match self {
            Rejection::MalformedRequest | Rejection::IllegalPath => 400,
            Rejection::RunNotFound | Rejection::FileNotFound(_) => 404,
            Rejection::InvariantViolation(_) | Rejection::Internal(_) => 500,
        }
    }

    pub fn content_type(&self) -> &'static str {
        "text/html"
    }
}
