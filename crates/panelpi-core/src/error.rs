//! Error handling for PanelPi
//!
//! Status presentation itself never fails: unknown values degrade to the
//! sentinel text. Errors only arise at the edges, when decoding printer
//! reports or reading input.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Status code error type
///
/// Raised when a printer status code cannot be interpreted at all.
/// Unrecognized single-letter codes are not errors, they decode to
/// [`crate::PrinterStatus::Unknown`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusCodeError {
    /// The status code was empty
    #[error("Empty printer status code")]
    Empty,

    /// The status code was longer than a single letter
    #[error("Printer status code must be a single character, got {code:?}")]
    TooLong {
        /// The offending code.
        code: String,
    },
}

/// Main error type for PanelPi
#[derive(Error, Debug)]
pub enum Error {
    /// Status code error
    #[error(transparent)]
    StatusCode(#[from] StatusCodeError),

    /// A printer report could not be decoded
    #[error("Failed to decode printer report: {0}")]
    Decode(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a decoding error
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::StatusCode(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
