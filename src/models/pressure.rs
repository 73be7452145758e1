use std::fmt;
use std::str::FromStr;

use crate::error::{RegistryError, Result};
use crate::models::descriptor::{StorageKey, WeatherVariable};
use crate::models::interpolation::{Bounds, InterpolationPolicy};
use crate::models::units::SiUnit;
use crate::utils::range::{fraction_of, interpolated};

/// Types of pressure level variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressureVariableType {
    Temperature,
    WindUComponent,
    WindVComponent,
    GeopotentialHeight,
    RelativeHumidity,
}

impl PressureVariableType {
    pub const ALL: [PressureVariableType; 5] = [
        PressureVariableType::Temperature,
        PressureVariableType::WindUComponent,
        PressureVariableType::WindVComponent,
        PressureVariableType::GeopotentialHeight,
        PressureVariableType::RelativeHumidity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PressureVariableType::Temperature => "temperature",
            PressureVariableType::WindUComponent => "wind_u_component",
            PressureVariableType::WindVComponent => "wind_v_component",
            PressureVariableType::GeopotentialHeight => "geopotential_height",
            PressureVariableType::RelativeHumidity => "relative_humidity",
        }
    }
}

impl fmt::Display for PressureVariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PressureVariableType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| RegistryError::UnknownVariable(s.to_string()))
    }
}

/// A pressure level variable on a given level in hPa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PressureVariable {
    pub variable: PressureVariableType,
    pub level: u32,
}

impl PressureVariable {
    pub fn new(variable: PressureVariableType, level: u32) -> Self {
        Self { variable, level }
    }
}

impl WeatherVariable for PressureVariable {
    fn storage_key(&self) -> StorageKey {
        StorageKey::new(self.to_string())
    }

    /// Upper-level fields are more dynamic, which compresses poorly, so
    /// precision is relaxed continuously towards lower pressure
    fn scale_factor(&self) -> f32 {
        let level = self.level as f32;
        match self.variable {
            // Scale factor 2 for everything higher than 300 hPa
            PressureVariableType::Temperature => {
                interpolated(2.0, 10.0, fraction_of(300.0, 1000.0, level))
            }
            // Scale factor 3 for levels higher than 500 hPa
            PressureVariableType::WindUComponent | PressureVariableType::WindVComponent => {
                interpolated(3.0, 10.0, fraction_of(500.0, 1000.0, level))
            }
            PressureVariableType::GeopotentialHeight => {
                interpolated(0.05, 1.0, fraction_of(0.0, 500.0, level))
            }
            PressureVariableType::RelativeHumidity => {
                interpolated(0.2, 1.0, fraction_of(0.0, 800.0, level))
            }
        }
    }

    fn interpolation(&self) -> InterpolationPolicy {
        match self.variable {
            PressureVariableType::Temperature
            | PressureVariableType::WindUComponent
            | PressureVariableType::WindVComponent
            | PressureVariableType::GeopotentialHeight => {
                InterpolationPolicy::Hermite { bounds: None }
            }
            PressureVariableType::RelativeHumidity => InterpolationPolicy::Hermite {
                bounds: Some(Bounds::new(0.0, 100.0)),
            },
        }
    }

    fn unit(&self) -> SiUnit {
        match self.variable {
            PressureVariableType::Temperature => SiUnit::Celsius,
            PressureVariableType::WindUComponent | PressureVariableType::WindVComponent => {
                SiUnit::MetrePerSecond
            }
            PressureVariableType::GeopotentialHeight => SiUnit::Metre,
            PressureVariableType::RelativeHumidity => SiUnit::Percentage,
        }
    }

    /// Pressure level fields already represent free-atmosphere values
    fn is_elevation_correctable(&self) -> bool {
        false
    }

    fn store_previous_forecast(&self) -> bool {
        false
    }
}

impl fmt::Display for PressureVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}hPa", self.variable, self.level)
    }
}

impl FromStr for PressureVariable {
    type Err = RegistryError;

    /// Parse the storage form `<type>_<level>hPa`, e.g. `temperature_850hPa`
    fn from_str(s: &str) -> Result<Self> {
        let stem = s
            .strip_suffix("hPa")
            .ok_or_else(|| RegistryError::UnknownVariable(s.to_string()))?;
        let (name, level) = stem
            .rsplit_once('_')
            .ok_or_else(|| RegistryError::UnknownVariable(s.to_string()))?;

        let variable = name
            .parse::<PressureVariableType>()
            .map_err(|_| RegistryError::UnknownVariable(s.to_string()))?;
        let level: u32 = level
            .parse()
            .map_err(|_| RegistryError::InvalidLevel(level.to_string()))?;
        if level == 0 {
            return Err(RegistryError::InvalidLevel(level.to_string()));
        }

        Ok(PressureVariable::new(variable, level))
    }
}
