//! Glucose reading history.
//!
//! [`History`] is append-only and is appended to by the device controller,
//! never by the settings layer; the panel and the monitor view only read it.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single past glucose reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlucoseReading {
    /// Glucose value in mg/dL.
    pub value_mg_dl: f64,
    /// When the reading was captured.
    pub timestamp: OffsetDateTime,
}

impl GlucoseReading {
    /// Create a reading.
    #[must_use]
    pub fn new(value_mg_dl: f64, timestamp: OffsetDateTime) -> Self {
        Self {
            value_mg_dl,
            timestamp,
        }
    }
}

/// Append-only list of past glucose readings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    readings: Vec<GlucoseReading>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading. Readings are never removed or reordered.
    pub fn push(&mut self, reading: GlucoseReading) {
        self.readings.push(reading);
    }

    /// The most recent reading, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&GlucoseReading> {
        self.readings.last()
    }

    /// Number of stored readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Iterate over readings, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &GlucoseReading> {
        self.readings.iter()
    }
}
