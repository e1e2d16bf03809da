//! Input errors raised while translating caller keys into events.

use thiserror::Error;

/// Errors that can occur when a caller supplies an unrecognised input.
///
/// Numeric problems are never reported here; they surface as the `Error`
/// display instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EventError {
    #[error("Invalid digit {0:?}. Expected 0-9 or '.'")]
    InvalidDigit(char),

    #[error("Unknown key: {0}")]
    UnknownKey(String),
}
