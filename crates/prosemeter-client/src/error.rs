//! Error types for prosemeter-client.
//!
//! These errors are internal to the crate: the public lookup operations
//! convert them into the tagged `Failure` variants before returning.

use thiserror::Error;

/// Result type alias for prosemeter-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to an upstream service.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level failure, including timeouts and JSON decode errors.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body parsed but did not contain the expected fields.
    #[error("unexpected response format")]
    UnexpectedFormat,
}
