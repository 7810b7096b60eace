//! Error types for parsing in glucowear-types.

use thiserror::Error;

/// Errors that can occur when parsing glucowear type names.
///
/// This error type is platform-agnostic and does not include
/// controller-specific errors (those belong in glucowear-core).
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The string does not name a known transmitter type.
    #[error("Unknown transmitter type: {0}")]
    UnknownTransmitter(String),

    /// The string does not name a known glucose unit.
    #[error("Unknown glucose unit: {0}")]
    UnknownUnit(String),
}

/// Result type alias using glucowear-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
