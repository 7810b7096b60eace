//! Shared app-state facade.
//!
//! A single [`AppState`] exists per running app. It carries the pieces of
//! controller-owned state the settings panel reads: which tab is selected,
//! which transmitter (if any) is connected, and the currently paired sensor.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use glucowear_types::TransmitterType;

/// Top-level tabs of the companion app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tab {
    /// Live glucose monitor.
    #[default]
    Monitor,
    /// Settings screen.
    Settings,
    /// Diagnostic log.
    Log,
}

/// Identity of the currently connected transmitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedTransmitter {
    /// Transmitter family.
    pub transmitter_type: TransmitterType,
    /// Advertised device name.
    pub name: String,
}

impl ConnectedTransmitter {
    /// Create a connected-transmitter record.
    pub fn new(transmitter_type: TransmitterType, name: impl Into<String>) -> Self {
        Self {
            transmitter_type,
            name: name.into(),
        }
    }
}

/// The CGM sensor currently paired, owned by the external controller.
///
/// The settings layer only hands this to the calibration pipeline; it never
/// reads or interprets sensor data itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    /// Sensor serial number.
    pub serial: String,
    /// Family of the transmitter the sensor reports through.
    pub transmitter_type: TransmitterType,
}

impl Sensor {
    /// Create a sensor handle.
    pub fn new(serial: impl Into<String>, transmitter_type: TransmitterType) -> Self {
        Self {
            serial: serial.into(),
            transmitter_type,
        }
    }
}

/// Shared app state observed by the settings panel.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Currently selected tab. Navigation itself is owned by an external
    /// view router; the panel only reads this.
    pub selected_tab: Tab,
    /// Currently connected transmitter, if any.
    pub connected: Option<ConnectedTransmitter>,
    /// Currently paired sensor, if any.
    pub sensor: Option<Arc<Sensor>>,
}

impl AppState {
    /// Create an empty app state (nothing connected, nothing paired).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Family of the connected transmitter, if one is connected.
    #[must_use]
    pub fn connected_transmitter_type(&self) -> Option<TransmitterType> {
        self.connected.as_ref().map(|t| t.transmitter_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state() {
        let app = AppState::new();
        assert_eq!(app.selected_tab, Tab::Monitor);
        assert!(app.connected.is_none());
        assert!(app.connected_transmitter_type().is_none());
        assert!(app.sensor.is_none());
    }

    #[test]
    fn test_connected_transmitter_type() {
        let app = AppState {
            connected: Some(ConnectedTransmitter::new(
                TransmitterType::MiaoMiao,
                "miaomiao 0042",
            )),
            ..AppState::new()
        };
        assert_eq!(
            app.connected_transmitter_type(),
            Some(TransmitterType::MiaoMiao)
        );
    }
}
