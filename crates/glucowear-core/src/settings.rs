//! Shared settings state.
//!
//! [`Settings`] is created once at app launch and lives for the process
//! lifetime. All mutation goes through a single logical writer (the settings
//! panel); persistence and restoration are owned by an external mechanism,
//! which is why the whole bag derives serde.

use serde::{Deserialize, Serialize};

use glucowear_types::GlucoseUnit;
use glucowear_types::TransmitterType;

use crate::error::{Error, Result};

/// Supported online (network sync) intervals, in minutes.
///
/// 0 is the "offline" sentinel: no periodic network sync.
pub const ONLINE_INTERVALS: [u32; 12] = [0, 1, 2, 3, 4, 5, 10, 15, 20, 30, 45, 60];

/// Online interval the offline toggle switches back to, in minutes.
pub const DEFAULT_ONLINE_INTERVAL: u32 = 5;

/// Bounds for the target/alarm low sliders, in mg/dL.
pub const LOW_GLUCOSE_BOUNDS: (f64, f64) = (40.0, 99.0);

/// Bounds for the target/alarm high sliders, in mg/dL.
pub const HIGH_GLUCOSE_BOUNDS: (f64, f64) = (140.0, 300.0);

/// User-configurable settings for the companion app.
///
/// Glucose values are stored in mg/dL regardless of the display unit.
/// Low/high pairs are clamped to their own bounds but no `low < high`
/// cross-field check exists; the sliders move independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether Bluetooth scanning is stopped.
    pub stopped_bluetooth: bool,
    /// Preferred transmitter family, or `None` to accept any.
    pub preferred_transmitter: TransmitterType,
    /// Free-text device-name filter applied during scanning.
    pub preferred_device_pattern: String,
    /// Minutes between network sync operations; 0 = offline.
    pub online_interval: u32,
    /// Display glucose in mmol/L instead of mg/dL.
    pub displaying_millimoles: bool,
    /// Whether user calibration is active.
    pub calibrating: bool,
    /// Whether the OOP calibration pipeline is applied; mirrors
    /// `calibrating` whenever the calibration toggle is used.
    pub using_oop: bool,
    /// Lower edge of the target glucose range, mg/dL.
    pub target_low: f64,
    /// Upper edge of the target glucose range, mg/dL.
    pub target_high: f64,
    /// Glucose value below which the low alarm fires, mg/dL.
    pub alarm_low: f64,
    /// Glucose value above which the high alarm fires, mg/dL.
    pub alarm_high: f64,
    /// Minutes between glucose readings.
    pub reading_interval: u32,
    /// Whether alert audio is muted.
    pub muted_audio: bool,
    /// Whether notifications are disabled.
    pub disabled_notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stopped_bluetooth: false,
            preferred_transmitter: TransmitterType::None,
            preferred_device_pattern: String::new(),
            online_interval: DEFAULT_ONLINE_INTERVAL,
            displaying_millimoles: false,
            calibrating: false,
            using_oop: false,
            target_low: 80.0,
            target_high: 170.0,
            alarm_low: 70.0,
            alarm_high: 200.0,
            reading_interval: 5,
            muted_audio: false,
            disabled_notifications: false,
        }
    }
}

impl Settings {
    /// The active glucose display unit.
    #[must_use]
    pub fn glucose_unit(&self) -> GlucoseUnit {
        GlucoseUnit::from_millimoles_flag(self.displaying_millimoles)
    }

    /// Set the online interval, restricted to [`ONLINE_INTERVALS`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOnlineInterval`] for any other value.
    pub fn set_online_interval(&mut self, minutes: u32) -> Result<()> {
        if !ONLINE_INTERVALS.contains(&minutes) {
            return Err(Error::UnsupportedOnlineInterval(minutes));
        }
        self.online_interval = minutes;
        Ok(())
    }

    /// Whether periodic network sync is disabled.
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.online_interval == 0
    }

    /// Set the target-range low edge, clamped to [`LOW_GLUCOSE_BOUNDS`].
    pub fn set_target_low(&mut self, mg_dl: f64) {
        self.target_low = mg_dl.clamp(LOW_GLUCOSE_BOUNDS.0, LOW_GLUCOSE_BOUNDS.1);
    }

    /// Set the target-range high edge, clamped to [`HIGH_GLUCOSE_BOUNDS`].
    pub fn set_target_high(&mut self, mg_dl: f64) {
        self.target_high = mg_dl.clamp(HIGH_GLUCOSE_BOUNDS.0, HIGH_GLUCOSE_BOUNDS.1);
    }

    /// Set the low alarm edge, clamped to [`LOW_GLUCOSE_BOUNDS`].
    pub fn set_alarm_low(&mut self, mg_dl: f64) {
        self.alarm_low = mg_dl.clamp(LOW_GLUCOSE_BOUNDS.0, LOW_GLUCOSE_BOUNDS.1);
    }

    /// Set the high alarm edge, clamped to [`HIGH_GLUCOSE_BOUNDS`].
    pub fn set_alarm_high(&mut self, mg_dl: f64) {
        self.alarm_high = mg_dl.clamp(HIGH_GLUCOSE_BOUNDS.0, HIGH_GLUCOSE_BOUNDS.1);
    }
}
