use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical physical unit for a stored variable
///
/// Descriptive metadata only: values handed to the registry's consumers are
/// assumed to already be expressed in this unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiUnit {
    Celsius,
    Percentage,
    Millimetre,
    Metre,
    MetrePerSecond,
    Hectopascal,
    WattPerSquareMetre,
    JoulePerKilogram,
    DegreeDirection,
}

impl SiUnit {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            SiUnit::Celsius => "°C",
            SiUnit::Percentage => "%",
            SiUnit::Millimetre => "mm",
            SiUnit::Metre => "m",
            SiUnit::MetrePerSecond => "m/s",
            SiUnit::Hectopascal => "hPa",
            SiUnit::WattPerSquareMetre => "W/m²",
            SiUnit::JoulePerKilogram => "J/kg",
            SiUnit::DegreeDirection => "°",
        }
    }
}

impl fmt::Display for SiUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}
