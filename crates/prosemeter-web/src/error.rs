//! Error types for prosemeter-web.
//!
//! Request handlers are infallible by design (pages always render with
//! whatever data succeeded); these errors only cover startup concerns.

use thiserror::Error;

/// Result type alias for prosemeter-web operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or starting the server.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed or was invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a configuration error from any displayable cause.
    pub fn config(message: impl std::fmt::Display) -> Self {
        Self::Config(message.to_string())
    }
}
