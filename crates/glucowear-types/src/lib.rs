//! Platform-agnostic types for the glucowear CGM companion.
//!
//! This crate provides the shared vocabulary used by the settings layer and
//! by the device controller: the transmitter-type enumeration, the glucose
//! display unit, and the errors raised when parsing either from text.
//!
//! # Example
//!
//! ```
//! use glucowear_types::{GlucoseUnit, TransmitterType};
//!
//! let unit = GlucoseUnit::MmolL;
//! assert_eq!(unit.format(126.0), "7.0");
//! assert_eq!(TransmitterType::MiaoMiao.name(), "MiaoMiao");
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{GlucoseUnit, MMOLL_PER_MGDL, TransmitterType};
