//! Settings and controller contract for the glucowear CGM companion.
//!
//! This crate holds the state the companion app's settings screen reads and
//! writes, and the commands that screen issues to the externally-owned
//! device controller. It deliberately contains no Bluetooth stack, no
//! calibration algorithm, and no rendering: those live behind the traits in
//! [`traits`].
//!
//! # Features
//!
//! - **Settings state**: the shared [`Settings`] bag with clamped edits
//! - **Interval domains**: pure computation of the allowed reading
//!   intervals per transmitter family
//! - **Panel controller**: [`SettingsPanel`], one method per user edit
//! - **Collaborator seams**: scan control, status/log sink, calibration
//!   pipeline
//! - **Mock controller**: [`MockController`] for tests
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use glucowear_core::{AppState, MockController, Settings, SettingsPanel};
//! use glucowear_core::traits::{CalibrationPipeline, ScanController, StatusSink};
//! use glucowear_types::TransmitterType;
//!
//! let controller = Arc::new(MockController::new());
//! let mut panel = SettingsPanel::new(
//!     Settings::default(),
//!     AppState::new(),
//!     Arc::clone(&controller) as Arc<dyn ScanController>,
//!     Arc::clone(&controller) as Arc<dyn StatusSink>,
//!     Arc::clone(&controller) as Arc<dyn CalibrationPipeline>,
//! );
//!
//! panel.set_preferred_transmitter(TransmitterType::MiaoMiao).unwrap();
//! assert_eq!(panel.reading_interval_domain().values(), vec![1, 3, 5]);
//! ```

pub mod app;
pub mod error;
pub mod history;
pub mod intervals;
pub mod mock;
pub mod panel;
pub mod settings;
pub mod traits;

pub use app::{AppState, ConnectedTransmitter, Sensor, Tab};
pub use error::{Error, Result};
pub use history::{GlucoseReading, History};
pub use intervals::{IntervalDomain, reading_interval_domain};
pub use mock::MockController;
pub use panel::SettingsPanel;
pub use settings::{
    DEFAULT_ONLINE_INTERVAL, HIGH_GLUCOSE_BOUNDS, LOW_GLUCOSE_BOUNDS, ONLINE_INTERVALS, Settings,
};
pub use traits::{CalibrationPipeline, ScanController, StatusSink};

// Re-export the shared vocabulary crate for convenience.
pub use glucowear_types::{GlucoseUnit, TransmitterType};
