//! Trait seams for the external collaborators of the settings layer.
//!
//! The settings panel is a boundary consumer: scanning, logging, and
//! calibration are owned elsewhere. These traits are the complete surface
//! the panel requires, and a mock implementation lives in [`crate::mock`]
//! for tests.

use async_trait::async_trait;

use crate::app::Sensor;

/// Control over the Bluetooth scanning loop.
///
/// Both operations are idempotent and fire-and-forget: the panel never
/// consumes a result and never retries.
pub trait ScanController: Send + Sync {
    /// Stop scanning for transmitters.
    fn stop_scan(&self);

    /// Restart scanning for transmitters.
    fn rescan(&self);
}

/// Write-only sink for user-visible status and diagnostic log lines.
pub trait StatusSink: Send + Sync {
    /// Show a short status message to the user.
    fn status(&self, message: &str);

    /// Append a line to the diagnostic log.
    fn log(&self, message: &str);
}

/// The calibration/OOP pipeline owned by the device controller.
///
/// The panel invokes both steps in order from a single task when the
/// calibration toggle flips: apply first, then re-parse. Neither step
/// returns a result the panel consumes; failure propagation and recovery
/// are entirely the collaborator's responsibility.
#[async_trait]
pub trait CalibrationPipeline: Send + Sync {
    /// Re-apply the calibration pipeline to the sensor's raw data.
    async fn apply_calibration(&self, sensor: &Sensor);

    /// Re-parse the sensor data after calibration has been applied.
    async fn on_sensor_parsed(&self, sensor: &Sensor);
}
