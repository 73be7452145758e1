use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::models::descriptor::{StorageKey, WeatherVariable};
use crate::models::interpolation::InterpolationPolicy;
use crate::models::pressure::PressureVariable;
use crate::models::surface::SurfaceVariable;
use crate::models::units::SiUnit;

/// The single addressable variable space consumed by the download, storage
/// and reader subsystems
///
/// Pure dispatch over the two catalogs; no policy logic of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Surface(SurfaceVariable),
    Pressure(PressureVariable),
}

impl WeatherVariable for Variable {
    fn storage_key(&self) -> StorageKey {
        match self {
            Variable::Surface(v) => v.storage_key(),
            Variable::Pressure(v) => v.storage_key(),
        }
    }

    fn scale_factor(&self) -> f32 {
        match self {
            Variable::Surface(v) => v.scale_factor(),
            Variable::Pressure(v) => v.scale_factor(),
        }
    }

    fn interpolation(&self) -> InterpolationPolicy {
        match self {
            Variable::Surface(v) => v.interpolation(),
            Variable::Pressure(v) => v.interpolation(),
        }
    }

    fn unit(&self) -> SiUnit {
        match self {
            Variable::Surface(v) => v.unit(),
            Variable::Pressure(v) => v.unit(),
        }
    }

    fn is_elevation_correctable(&self) -> bool {
        match self {
            Variable::Surface(v) => v.is_elevation_correctable(),
            Variable::Pressure(v) => v.is_elevation_correctable(),
        }
    }

    fn store_previous_forecast(&self) -> bool {
        match self {
            Variable::Surface(v) => v.store_previous_forecast(),
            Variable::Pressure(v) => v.store_previous_forecast(),
        }
    }
}

impl From<SurfaceVariable> for Variable {
    fn from(variable: SurfaceVariable) -> Self {
        Variable::Surface(variable)
    }
}

impl From<PressureVariable> for Variable {
    fn from(variable: PressureVariable) -> Self {
        Variable::Pressure(variable)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Surface(v) => write!(f, "{}", v),
            Variable::Pressure(v) => write!(f, "{}", v),
        }
    }
}

impl FromStr for Variable {
    type Err = RegistryError;

    /// Resolve a variable identifier: surface catalog first, then the
    /// pressure form `<type>_<level>hPa`
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(surface) = s.parse::<SurfaceVariable>() {
            debug!(variable = %surface, "resolved surface variable");
            return Ok(Variable::Surface(surface));
        }
        match s.parse::<PressureVariable>() {
            Ok(pressure) => {
                debug!(variable = %pressure, "resolved pressure variable");
                Ok(Variable::Pressure(pressure))
            }
            Err(err @ RegistryError::InvalidLevel(_)) => Err(err),
            Err(_) => Err(RegistryError::UnknownVariable(s.to_string())),
        }
    }
}
