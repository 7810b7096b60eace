//! Mock collaborator for testing.
//!
//! [`MockController`] implements all three collaborator traits
//! ([`ScanController`], [`StatusSink`], [`CalibrationPipeline`]) and records
//! every call, so panel behavior can be asserted without a Bluetooth stack
//! or a real calibration pipeline.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::app::Sensor;
use crate::traits::{CalibrationPipeline, ScanController, StatusSink};

/// A recording implementation of the panel's collaborator traits.
#[derive(Debug, Default)]
pub struct MockController {
    stop_scan_calls: AtomicU32,
    rescan_calls: AtomicU32,
    apply_calibration_calls: AtomicU32,
    sensor_parsed_calls: AtomicU32,
    statuses: Mutex<Vec<String>>,
    log_lines: Mutex<Vec<String>>,
    /// Names of pipeline steps in invocation order.
    call_order: Mutex<Vec<&'static str>>,
    /// Simulated calibration latency in milliseconds (0 = no delay).
    calibration_latency_ms: AtomicU64,
}

impl MockController {
    /// Create a mock with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artificial delay to `apply_calibration`, to exercise the
    /// panel's sequencing under a slow pipeline.
    pub fn set_calibration_latency(&self, latency: Duration) {
        self.calibration_latency_ms
            .store(latency.as_millis() as u64, Ordering::Relaxed);
    }

    /// Number of `stop_scan` calls.
    pub fn stop_scan_calls(&self) -> u32 {
        self.stop_scan_calls.load(Ordering::Relaxed)
    }

    /// Number of `rescan` calls.
    pub fn rescan_calls(&self) -> u32 {
        self.rescan_calls.load(Ordering::Relaxed)
    }

    /// Number of `apply_calibration` calls.
    pub fn apply_calibration_calls(&self) -> u32 {
        self.apply_calibration_calls.load(Ordering::Relaxed)
    }

    /// Number of `on_sensor_parsed` calls.
    pub fn sensor_parsed_calls(&self) -> u32 {
        self.sensor_parsed_calls.load(Ordering::Relaxed)
    }

    /// Status messages in the order they were shown.
    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }

    /// Log lines in the order they were written.
    pub fn log_lines(&self) -> Vec<String> {
        self.log_lines.lock().unwrap().clone()
    }

    /// Pipeline step names in invocation order.
    pub fn call_order(&self) -> Vec<&'static str> {
        self.call_order.lock().unwrap().clone()
    }
}

impl ScanController for MockController {
    fn stop_scan(&self) {
        self.stop_scan_calls.fetch_add(1, Ordering::Relaxed);
    }

    fn rescan(&self) {
        self.rescan_calls.fetch_add(1, Ordering::Relaxed);
    }
}

impl StatusSink for MockController {
    fn status(&self, message: &str) {
        self.statuses.lock().unwrap().push(message.to_string());
    }

    fn log(&self, message: &str) {
        self.log_lines.lock().unwrap().push(message.to_string());
    }
}

#[async_trait]
impl CalibrationPipeline for MockController {
    async fn apply_calibration(&self, _sensor: &Sensor) {
        let latency = self.calibration_latency_ms.load(Ordering::Relaxed);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        self.apply_calibration_calls.fetch_add(1, Ordering::Relaxed);
        self.call_order.lock().unwrap().push("apply_calibration");
    }

    async fn on_sensor_parsed(&self, _sensor: &Sensor) {
        self.sensor_parsed_calls.fetch_add(1, Ordering::Relaxed);
        self.call_order.lock().unwrap().push("on_sensor_parsed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glucowear_types::TransmitterType;

    #[test]
    fn test_scan_calls_are_counted() {
        let mock = MockController::new();
        mock.stop_scan();
        mock.rescan();
        mock.rescan();
        assert_eq!(mock.stop_scan_calls(), 1);
        assert_eq!(mock.rescan_calls(), 2);
    }

    #[test]
    fn test_messages_are_recorded_in_order() {
        let mock = MockController::new();
        mock.status("first");
        mock.status("second");
        mock.log("line");
        assert_eq!(mock.statuses(), vec!["first", "second"]);
        assert_eq!(mock.log_lines(), vec!["line"]);
    }

    #[tokio::test]
    async fn test_pipeline_records_order() {
        let mock = MockController::new();
        let sensor = Sensor::new("0M00001ABC", TransmitterType::MiaoMiao);
        mock.apply_calibration(&sensor).await;
        mock.on_sensor_parsed(&sensor).await;
        assert_eq!(mock.call_order(), vec!["apply_calibration", "on_sensor_parsed"]);
    }
}
