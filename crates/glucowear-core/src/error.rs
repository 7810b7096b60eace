//! Error types for glucowear-core.
//!
//! The settings layer has a deliberately small error surface: the only
//! errors raised here are rejections of edits that the UI would have
//! prevented by disabling or constraining a control. Commands sent to the
//! external controller remain fire-and-forget and never produce an error at
//! this layer.

use thiserror::Error;

use crate::intervals::IntervalDomain;

/// Errors that can occur when editing glucowear settings.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Edit rejected because Bluetooth scanning is stopped.
    ///
    /// The settings screen disables the transmitter picker and the
    /// device-pattern field while scanning is stopped.
    #[error("Scanning is stopped; re-enable Bluetooth first")]
    ScanningStopped,

    /// Online interval is not one of the supported values.
    #[error("Unsupported online interval: {0} min")]
    UnsupportedOnlineInterval(u32),

    /// Reading interval is outside the domain allowed for the active
    /// transmitter type.
    #[error("Unsupported reading interval: {minutes} min (allowed: {domain})")]
    UnsupportedReadingInterval {
        /// The rejected interval in minutes.
        minutes: u32,
        /// The domain computed for the active transmitter.
        domain: IntervalDomain,
    },

    /// Failed to parse a transmitter type or glucose unit.
    #[error(transparent)]
    Parse(#[from] glucowear_types::ParseError),
}

/// Result type alias using glucowear-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
