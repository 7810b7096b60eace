//! Settings panel controller.
//!
//! [`SettingsPanel`] is the single writer of the shared [`Settings`] bag. It
//! exposes one method per user-visible edit on the settings screen and
//! translates the few edits with side effects into commands on the external
//! collaborators. All mutation happens on the caller's task; the only
//! asynchronous sequencing is the calibration toggle, which spawns a single
//! task that applies calibration and then re-parses the sensor, in that
//! order.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use glucowear_types::{GlucoseUnit, TransmitterType};

use crate::app::AppState;
use crate::error::{Error, Result};
use crate::intervals::{IntervalDomain, reading_interval_domain};
use crate::settings::{DEFAULT_ONLINE_INTERVAL, Settings};
use crate::traits::{CalibrationPipeline, ScanController, StatusSink};

/// Controller behind the settings screen.
pub struct SettingsPanel {
    settings: Settings,
    app: AppState,
    scanner: Arc<dyn ScanController>,
    sink: Arc<dyn StatusSink>,
    calibration: Arc<dyn CalibrationPipeline>,
}

impl std::fmt::Debug for SettingsPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsPanel")
            .field("settings", &self.settings)
            .field("app", &self.app)
            .finish_non_exhaustive()
    }
}

impl SettingsPanel {
    /// Create a panel over the shared settings and app state.
    pub fn new(
        settings: Settings,
        app: AppState,
        scanner: Arc<dyn ScanController>,
        sink: Arc<dyn StatusSink>,
        calibration: Arc<dyn CalibrationPipeline>,
    ) -> Self {
        Self {
            settings,
            app,
            scanner,
            sink,
            calibration,
        }
    }

    /// The current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The shared app state this panel observes.
    #[must_use]
    pub fn app(&self) -> &AppState {
        &self.app
    }

    /// Mutable access to the app state, for the controller that owns the
    /// connection (updating the connected transmitter or paired sensor).
    pub fn app_mut(&mut self) -> &mut AppState {
        &mut self.app
    }

    // --- Bluetooth ---

    /// Flip Bluetooth scanning on or off.
    ///
    /// Stopping instructs the controller to stop scanning and reports it;
    /// starting issues a rescan. Both commands are fire-and-forget.
    pub fn toggle_bluetooth(&mut self) {
        self.settings.stopped_bluetooth = !self.settings.stopped_bluetooth;
        if self.settings.stopped_bluetooth {
            self.scanner.stop_scan();
            self.sink.status("Stopped scanning");
            self.sink.log("Bluetooth: stopped scanning");
        } else {
            self.scanner.rescan();
        }
        info!(stopped = self.settings.stopped_bluetooth, "toggled Bluetooth scanning");
    }

    /// Set the preferred transmitter family.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScanningStopped`] while scanning is stopped; the
    /// settings screen disables the picker in that state.
    pub fn set_preferred_transmitter(&mut self, transmitter: TransmitterType) -> Result<()> {
        if self.settings.stopped_bluetooth {
            return Err(Error::ScanningStopped);
        }
        info!(%transmitter, "preferred transmitter changed");
        self.settings.preferred_transmitter = transmitter;
        Ok(())
    }

    /// Set the free-text device-name filter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScanningStopped`] while scanning is stopped.
    pub fn set_device_pattern(&mut self, pattern: impl Into<String>) -> Result<()> {
        if self.settings.stopped_bluetooth {
            return Err(Error::ScanningStopped);
        }
        self.settings.preferred_device_pattern = pattern.into();
        debug!(pattern = %self.settings.preferred_device_pattern, "device pattern changed");
        Ok(())
    }

    // --- Network sync ---

    /// Choose the online interval from the fixed set of supported values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOnlineInterval`] for any other value.
    pub fn set_online_interval(&mut self, minutes: u32) -> Result<()> {
        self.settings.set_online_interval(minutes)?;
        debug!(minutes, "online interval changed");
        Ok(())
    }

    /// Flip between offline and the default online interval.
    ///
    /// Any nonzero interval goes to 0 (offline); 0 goes back to 5 minutes.
    pub fn toggle_online(&mut self) {
        self.settings.online_interval = if self.settings.online_interval != 0 {
            0
        } else {
            DEFAULT_ONLINE_INTERVAL
        };
        debug!(minutes = self.settings.online_interval, "online toggled");
    }

    // --- Display ---

    /// Select the glucose display unit.
    pub fn set_glucose_unit(&mut self, unit: GlucoseUnit) {
        self.settings.displaying_millimoles = unit == GlucoseUnit::MmolL;
        debug!(%unit, "display unit changed");
    }

    // --- Calibration ---

    /// Flip calibration on or off.
    ///
    /// The flag flips synchronously and `using_oop` always mirrors the new
    /// value. If a sensor is paired, a single task is spawned that awaits
    /// the calibration pipeline and then the sensor re-parse, sequentially.
    /// No cancellation or timeout applies at this layer; the returned handle
    /// lets a caller await or abort the pipeline run. Returns `None` when no
    /// sensor is paired.
    pub fn toggle_calibration(&mut self) -> Option<JoinHandle<()>> {
        self.settings.calibrating = !self.settings.calibrating;
        self.settings.using_oop = self.settings.calibrating;
        info!(calibrating = self.settings.calibrating, "toggled calibration");

        let sensor = self.app.sensor.clone()?;
        let pipeline = Arc::clone(&self.calibration);
        Some(tokio::spawn(async move {
            pipeline.apply_calibration(&sensor).await;
            pipeline.on_sensor_parsed(&sensor).await;
        }))
    }

    // --- Glucose ranges ---

    /// Set the target-range low slider. Clamped to its bounds.
    pub fn set_target_low(&mut self, mg_dl: f64) {
        self.settings.set_target_low(mg_dl);
        debug!(mg_dl = self.settings.target_low, "target low changed");
    }

    /// Set the target-range high slider. Clamped to its bounds.
    pub fn set_target_high(&mut self, mg_dl: f64) {
        self.settings.set_target_high(mg_dl);
        debug!(mg_dl = self.settings.target_high, "target high changed");
    }

    /// Set the low-alarm slider. Clamped to its bounds.
    pub fn set_alarm_low(&mut self, mg_dl: f64) {
        self.settings.set_alarm_low(mg_dl);
        debug!(mg_dl = self.settings.alarm_low, "alarm low changed");
    }

    /// Set the high-alarm slider. Clamped to its bounds.
    pub fn set_alarm_high(&mut self, mg_dl: f64) {
        self.settings.set_alarm_high(mg_dl);
        debug!(mg_dl = self.settings.alarm_high, "alarm high changed");
    }

    // --- Reading interval ---

    /// The reading-interval domain for the active transmitter.
    ///
    /// The preferred transmitter decides; when no preference is set, the
    /// connected transmitter's family does.
    #[must_use]
    pub fn reading_interval_domain(&self) -> IntervalDomain {
        reading_interval_domain(
            self.settings.preferred_transmitter,
            self.app.connected_transmitter_type(),
        )
    }

    /// Set the reading interval, validated against the current domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedReadingInterval`] when the value is not a
    /// member of [`Self::reading_interval_domain`].
    pub fn set_reading_interval(&mut self, minutes: u32) -> Result<()> {
        let domain = self.reading_interval_domain();
        if !domain.contains(minutes) {
            return Err(Error::UnsupportedReadingInterval { minutes, domain });
        }
        info!(minutes, "reading interval changed");
        self.settings.reading_interval = minutes;
        Ok(())
    }

    // --- Navigation ---

    /// Triggered when the user navigates to the monitor view.
    ///
    /// Issues a rescan; the navigation itself is owned by the external view
    /// router.
    pub fn open_monitor(&mut self) {
        debug!("monitor opened, rescanning");
        self.scanner.rescan();
    }

    // --- Alerts ---

    /// Flip alert audio muting.
    pub fn toggle_audio_mute(&mut self) {
        self.settings.muted_audio = !self.settings.muted_audio;
        debug!(muted = self.settings.muted_audio, "audio mute toggled");
    }

    /// Flip notifications on or off.
    ///
    /// Only the flag flips. A badge-counter reset is the notification
    /// owner's job, not handled at this layer.
    pub fn toggle_notifications(&mut self) {
        self.settings.disabled_notifications = !self.settings.disabled_notifications;
        debug!(
            disabled = self.settings.disabled_notifications,
            "notifications toggled"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ConnectedTransmitter;
    use crate::mock::MockController;

    fn panel_with_mock() -> (SettingsPanel, Arc<MockController>) {
        let mock = Arc::new(MockController::new());
        let panel = SettingsPanel::new(
            Settings::default(),
            AppState::new(),
            Arc::clone(&mock) as Arc<dyn ScanController>,
            Arc::clone(&mock) as Arc<dyn StatusSink>,
            Arc::clone(&mock) as Arc<dyn CalibrationPipeline>,
        );
        (panel, mock)
    }

    #[test]
    fn test_stopping_bluetooth_stops_scan_and_reports() {
        let (mut panel, mock) = panel_with_mock();

        panel.toggle_bluetooth();
        assert!(panel.settings().stopped_bluetooth);
        assert_eq!(mock.stop_scan_calls(), 1);
        assert_eq!(mock.rescan_calls(), 0);
        assert_eq!(mock.statuses(), vec!["Stopped scanning"]);
        assert_eq!(mock.log_lines(), vec!["Bluetooth: stopped scanning"]);
    }

    #[test]
    fn test_starting_bluetooth_rescans_only() {
        let (mut panel, mock) = panel_with_mock();

        panel.toggle_bluetooth();
        panel.toggle_bluetooth();
        assert!(!panel.settings().stopped_bluetooth);
        assert_eq!(mock.stop_scan_calls(), 1);
        assert_eq!(mock.rescan_calls(), 1);
    }

    #[test]
    fn test_transmitter_and_pattern_rejected_while_stopped() {
        let (mut panel, _mock) = panel_with_mock();
        panel.toggle_bluetooth();

        assert!(matches!(
            panel.set_preferred_transmitter(TransmitterType::Abbott),
            Err(Error::ScanningStopped)
        ));
        assert!(matches!(
            panel.set_device_pattern("miao"),
            Err(Error::ScanningStopped)
        ));
        assert_eq!(panel.settings().preferred_transmitter, TransmitterType::None);
        assert_eq!(panel.settings().preferred_device_pattern, "");
    }

    #[test]
    fn test_transmitter_and_pattern_accepted_while_scanning() {
        let (mut panel, _mock) = panel_with_mock();

        panel.set_preferred_transmitter(TransmitterType::Blu).unwrap();
        panel.set_device_pattern("BLU 1234").unwrap();
        assert_eq!(panel.settings().preferred_transmitter, TransmitterType::Blu);
        assert_eq!(panel.settings().preferred_device_pattern, "BLU 1234");
    }

    #[test]
    fn test_toggle_online_flips_between_offline_and_five() {
        let (mut panel, _mock) = panel_with_mock();
        assert_eq!(panel.settings().online_interval, 5);

        panel.toggle_online();
        assert_eq!(panel.settings().online_interval, 0);
        assert!(panel.settings().is_offline());

        panel.toggle_online();
        assert_eq!(panel.settings().online_interval, 5);

        panel.set_online_interval(45).unwrap();
        panel.toggle_online();
        assert_eq!(panel.settings().online_interval, 0);
    }

    #[test]
    fn test_glucose_unit_proxy() {
        let (mut panel, _mock) = panel_with_mock();
        panel.set_glucose_unit(GlucoseUnit::MmolL);
        assert!(panel.settings().displaying_millimoles);
        assert_eq!(panel.settings().glucose_unit(), GlucoseUnit::MmolL);
        panel.set_glucose_unit(GlucoseUnit::MgDl);
        assert!(!panel.settings().displaying_millimoles);
    }

    #[tokio::test]
    async fn test_calibration_toggle_mirrors_using_oop() {
        let (mut panel, _mock) = panel_with_mock();

        // No paired sensor: flags still flip, no task spawned.
        assert!(panel.toggle_calibration().is_none());
        assert!(panel.settings().calibrating);
        assert!(panel.settings().using_oop);

        assert!(panel.toggle_calibration().is_none());
        assert!(!panel.settings().calibrating);
        assert!(!panel.settings().using_oop);
    }

    #[tokio::test]
    async fn test_calibration_runs_apply_then_parse() {
        let (mut panel, mock) = panel_with_mock();
        panel.app_mut().sensor = Some(Arc::new(crate::app::Sensor::new(
            "0M00001ABC",
            TransmitterType::MiaoMiao,
        )));

        let handle = panel.toggle_calibration().expect("sensor is paired");
        handle.await.unwrap();

        assert_eq!(mock.apply_calibration_calls(), 1);
        assert_eq!(mock.sensor_parsed_calls(), 1);
        assert_eq!(mock.call_order(), vec!["apply_calibration", "on_sensor_parsed"]);
    }

    #[test]
    fn test_reading_interval_validated_against_domain() {
        let (mut panel, _mock) = panel_with_mock();
        panel.set_preferred_transmitter(TransmitterType::MiaoMiao).unwrap();

        panel.set_reading_interval(3).unwrap();
        assert_eq!(panel.settings().reading_interval, 3);

        let err = panel.set_reading_interval(2).unwrap_err();
        assert!(err.to_string().contains("2 min"));
        assert_eq!(panel.settings().reading_interval, 3);
    }

    #[test]
    fn test_reading_interval_domain_follows_connected_without_preference() {
        let (mut panel, _mock) = panel_with_mock();
        panel.app_mut().connected = Some(ConnectedTransmitter::new(
            TransmitterType::Blu,
            "blu 007",
        ));

        assert_eq!(panel.reading_interval_domain().values(), vec![5]);
        assert!(panel.set_reading_interval(1).is_err());
        panel.set_reading_interval(5).unwrap();
    }

    #[test]
    fn test_open_monitor_rescans() {
        let (mut panel, mock) = panel_with_mock();
        panel.open_monitor();
        assert_eq!(mock.rescan_calls(), 1);
        assert_eq!(mock.stop_scan_calls(), 0);
    }

    #[test]
    fn test_mute_and_notification_toggles() {
        let (mut panel, _mock) = panel_with_mock();

        panel.toggle_audio_mute();
        assert!(panel.settings().muted_audio);
        panel.toggle_audio_mute();
        assert!(!panel.settings().muted_audio);

        panel.toggle_notifications();
        assert!(panel.settings().disabled_notifications);
        panel.toggle_notifications();
        assert!(!panel.settings().disabled_notifications);
    }
}
