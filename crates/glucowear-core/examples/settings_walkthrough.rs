//! Example: Driving the Settings Panel
//!
//! This example demonstrates the settings panel against the mock
//! controller: toggling scanning, picking a transmitter, adjusting the
//! glucose ranges, and running the calibration pipeline.
//!
//! Run with: `cargo run --example settings_walkthrough`

use std::sync::Arc;

use glucowear_core::traits::{CalibrationPipeline, ScanController, StatusSink};
use glucowear_core::{AppState, MockController, Sensor, Settings, SettingsPanel};
use glucowear_types::{GlucoseUnit, TransmitterType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let controller = Arc::new(MockController::new());
    let app = AppState {
        sensor: Some(Arc::new(Sensor::new("0M00001ABC", TransmitterType::MiaoMiao))),
        ..AppState::new()
    };
    let mut panel = SettingsPanel::new(
        Settings::default(),
        app,
        Arc::clone(&controller) as Arc<dyn ScanController>,
        Arc::clone(&controller) as Arc<dyn StatusSink>,
        Arc::clone(&controller) as Arc<dyn CalibrationPipeline>,
    );

    // Pick a transmitter and see how the reading-interval domain follows.
    panel.set_preferred_transmitter(TransmitterType::MiaoMiao)?;
    let domain = panel.reading_interval_domain();
    println!("Reading intervals for MiaoMiao: {:?} min", domain.values());
    panel.set_reading_interval(3)?;

    // Stop and restart scanning.
    panel.toggle_bluetooth();
    println!("Scanning stopped ({} stop call)", controller.stop_scan_calls());
    panel.toggle_bluetooth();
    println!("Scanning resumed ({} rescan call)", controller.rescan_calls());

    // Adjust the display unit and the glucose ranges.
    panel.set_glucose_unit(GlucoseUnit::MmolL);
    panel.set_target_low(75.0);
    panel.set_target_high(160.0);
    let unit = panel.settings().glucose_unit();
    println!(
        "Target range: {} - {} {}",
        unit.format(panel.settings().target_low),
        unit.format(panel.settings().target_high),
        unit
    );

    // Toggle calibration and wait for the pipeline to finish.
    if let Some(handle) = panel.toggle_calibration() {
        handle.await?;
    }
    println!(
        "Calibration pipeline ran: {:?}",
        controller.call_order()
    );

    Ok(())
}
