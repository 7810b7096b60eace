//! Core types for the glucowear CGM companion.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Conversion factor between mg/dL and mmol/L for glucose values.
pub const MMOLL_PER_MGDL: f64 = 18.0182;

/// Type of Bluetooth glucose transmitter.
///
/// `None` means "no preference": the app will pair with whatever compatible
/// transmitter it discovers.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new transmitter
/// families in future versions without breaking downstream code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum TransmitterType {
    /// No preferred transmitter (accept any).
    #[default]
    None,
    /// Abbott Libre direct Bluetooth.
    Abbott,
    /// Ambrosia BLU reader.
    Blu,
    /// Bubble bridge.
    Bubble,
    /// Libre 2 direct connection.
    Libre2,
    /// MiaoMiao bridge.
    MiaoMiao,
}

impl TransmitterType {
    /// All known transmitter types, in picker order.
    pub const ALL: [TransmitterType; 6] = [
        TransmitterType::None,
        TransmitterType::Abbott,
        TransmitterType::Blu,
        TransmitterType::Bubble,
        TransmitterType::Libre2,
        TransmitterType::MiaoMiao,
    ];

    /// Human-readable name for pickers and logs.
    ///
    /// # Examples
    ///
    /// ```
    /// use glucowear_types::TransmitterType;
    ///
    /// assert_eq!(TransmitterType::None.name(), "Any");
    /// assert_eq!(TransmitterType::MiaoMiao.name(), "MiaoMiao");
    /// ```
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TransmitterType::None => "Any",
            TransmitterType::Abbott => "Abbott",
            TransmitterType::Blu => "BLU",
            TransmitterType::Bubble => "Bubble",
            TransmitterType::Libre2 => "Libre 2",
            TransmitterType::MiaoMiao => "MiaoMiao",
        }
    }

    /// Parse a transmitter type from its name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use glucowear_types::TransmitterType;
    ///
    /// assert_eq!(TransmitterType::from_name("miaomiao"), Some(TransmitterType::MiaoMiao));
    /// assert_eq!(TransmitterType::from_name("Libre 2"), Some(TransmitterType::Libre2));
    /// assert_eq!(TransmitterType::from_name("dexcom"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        match lower.as_str() {
            "any" | "none" => Some(TransmitterType::None),
            "abbott" => Some(TransmitterType::Abbott),
            "blu" => Some(TransmitterType::Blu),
            "bubble" => Some(TransmitterType::Bubble),
            "libre 2" | "libre2" => Some(TransmitterType::Libre2),
            "miaomiao" => Some(TransmitterType::MiaoMiao),
            _ => None,
        }
    }
}

impl FromStr for TransmitterType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError::UnknownTransmitter(s.to_string()))
    }
}

impl fmt::Display for TransmitterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Glucose display unit.
///
/// Exactly two values exist; the app stores the choice as a boolean
/// (`displaying_millimoles`) and maps it onto this enum at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GlucoseUnit {
    /// Milligrams per deciliter.
    #[default]
    MgDl,
    /// Millimoles per liter.
    MmolL,
}

impl GlucoseUnit {
    /// Both units, in picker order.
    pub const ALL: [GlucoseUnit; 2] = [GlucoseUnit::MgDl, GlucoseUnit::MmolL];

    /// Human-readable unit label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            GlucoseUnit::MgDl => "mg/dL",
            GlucoseUnit::MmolL => "mmol/L",
        }
    }

    /// Render a glucose value (stored internally in mg/dL) in this unit.
    ///
    /// mg/dL values are whole numbers; mmol/L values are shown with one
    /// decimal after dividing by [`MMOLL_PER_MGDL`].
    ///
    /// # Examples
    ///
    /// ```
    /// use glucowear_types::GlucoseUnit;
    ///
    /// assert_eq!(GlucoseUnit::MgDl.format(126.0), "126");
    /// assert_eq!(GlucoseUnit::MmolL.format(126.0), "7.0");
    /// ```
    #[must_use]
    pub fn format(&self, mg_dl: f64) -> String {
        match self {
            GlucoseUnit::MgDl => format!("{mg_dl:.0}"),
            GlucoseUnit::MmolL => format!("{:.1}", mg_dl / MMOLL_PER_MGDL),
        }
    }

    /// Map the stored `displaying_millimoles` boolean onto a unit.
    #[must_use]
    pub fn from_millimoles_flag(displaying_millimoles: bool) -> Self {
        if displaying_millimoles {
            GlucoseUnit::MmolL
        } else {
            GlucoseUnit::MgDl
        }
    }
}

impl FromStr for GlucoseUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mg/dl" | "mgdl" => Ok(GlucoseUnit::MgDl),
            "mmol/l" | "mmoll" => Ok(GlucoseUnit::MmolL),
            _ => Err(ParseError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for GlucoseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transmitter_names() {
        assert_eq!(TransmitterType::None.name(), "Any");
        assert_eq!(TransmitterType::Abbott.name(), "Abbott");
        assert_eq!(TransmitterType::Blu.name(), "BLU");
        assert_eq!(TransmitterType::Bubble.name(), "Bubble");
        assert_eq!(TransmitterType::Libre2.name(), "Libre 2");
        assert_eq!(TransmitterType::MiaoMiao.name(), "MiaoMiao");
    }

    #[test]
    fn test_transmitter_from_name_round_trips() {
        for t in TransmitterType::ALL {
            assert_eq!(TransmitterType::from_name(t.name()), Some(t));
        }
    }

    #[test]
    fn test_transmitter_from_str_rejects_unknown() {
        let err = "dexcom".parse::<TransmitterType>().unwrap_err();
        assert!(err.to_string().contains("dexcom"));
    }

    #[test]
    fn test_transmitter_default_is_none() {
        assert_eq!(TransmitterType::default(), TransmitterType::None);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(GlucoseUnit::MgDl.label(), "mg/dL");
        assert_eq!(GlucoseUnit::MmolL.label(), "mmol/L");
        assert_eq!(GlucoseUnit::ALL.len(), 2);
    }

    #[test]
    fn test_unit_formatting() {
        assert_eq!(GlucoseUnit::MgDl.format(99.0), "99");
        assert_eq!(GlucoseUnit::MgDl.format(180.4), "180");
        // 180 / 18.0182 = 9.99
        assert_eq!(GlucoseUnit::MmolL.format(180.0), "10.0");
        assert_eq!(GlucoseUnit::MmolL.format(72.0), "4.0");
    }

    #[test]
    fn test_unit_from_millimoles_flag() {
        assert_eq!(GlucoseUnit::from_millimoles_flag(false), GlucoseUnit::MgDl);
        assert_eq!(GlucoseUnit::from_millimoles_flag(true), GlucoseUnit::MmolL);
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("mg/dL".parse::<GlucoseUnit>().unwrap(), GlucoseUnit::MgDl);
        assert_eq!("mmol/l".parse::<GlucoseUnit>().unwrap(), GlucoseUnit::MmolL);
        assert!("moles".parse::<GlucoseUnit>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_transmitter_serialization() {
        assert_eq!(
            serde_json::to_string(&TransmitterType::MiaoMiao).unwrap(),
            "\"MiaoMiao\""
        );
        let t: TransmitterType = serde_json::from_str("\"Abbott\"").unwrap();
        assert_eq!(t, TransmitterType::Abbott);
    }
}
