use std::fmt;
use std::str::FromStr;

use crate::error::{RegistryError, Result};
use crate::models::descriptor::{StorageKey, WeatherVariable};
use crate::models::interpolation::{Bounds, InterpolationPolicy};
use crate::models::units::SiUnit;

/// All surface-level variables produced by the model
///
/// The total cloud cover field reads far too high in this model output, so
/// only the per-layer covers are exposed. Snow depth water equivalent is
/// unsupported for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceVariable {
    Temperature2m,
    CloudCoverLow,
    CloudCoverMid,
    CloudCoverHigh,
    CloudCover2m,
    PressureMsl,
    RelativeHumidity2m,

    WindSpeed10m,
    WindDirection10m,
    WindSpeed50m,
    WindDirection50m,

    SnowfallWaterEquivalent,
    /// Only downloaded and added to regular snowfall, not stored on disk
    SnowfallWaterEquivalentConvective,
    Showers,
    Precipitation,

    WindGusts10m,

    ShortwaveRadiation,
    DirectRadiation,

    SurfaceTemperature,
    Cape,
    Visibility,
}

impl SurfaceVariable {
    pub const ALL: [SurfaceVariable; 21] = [
        SurfaceVariable::Temperature2m,
        SurfaceVariable::CloudCoverLow,
        SurfaceVariable::CloudCoverMid,
        SurfaceVariable::CloudCoverHigh,
        SurfaceVariable::CloudCover2m,
        SurfaceVariable::PressureMsl,
        SurfaceVariable::RelativeHumidity2m,
        SurfaceVariable::WindSpeed10m,
        SurfaceVariable::WindDirection10m,
        SurfaceVariable::WindSpeed50m,
        SurfaceVariable::WindDirection50m,
        SurfaceVariable::SnowfallWaterEquivalent,
        SurfaceVariable::SnowfallWaterEquivalentConvective,
        SurfaceVariable::Showers,
        SurfaceVariable::Precipitation,
        SurfaceVariable::WindGusts10m,
        SurfaceVariable::ShortwaveRadiation,
        SurfaceVariable::DirectRadiation,
        SurfaceVariable::SurfaceTemperature,
        SurfaceVariable::Cape,
        SurfaceVariable::Visibility,
    ];

    pub fn iter() -> impl Iterator<Item = SurfaceVariable> {
        Self::ALL.into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            SurfaceVariable::Temperature2m => "temperature_2m",
            SurfaceVariable::CloudCoverLow => "cloud_cover_low",
            SurfaceVariable::CloudCoverMid => "cloud_cover_mid",
            SurfaceVariable::CloudCoverHigh => "cloud_cover_high",
            SurfaceVariable::CloudCover2m => "cloud_cover_2m",
            SurfaceVariable::PressureMsl => "pressure_msl",
            SurfaceVariable::RelativeHumidity2m => "relative_humidity_2m",
            SurfaceVariable::WindSpeed10m => "wind_speed_10m",
            SurfaceVariable::WindDirection10m => "wind_direction_10m",
            SurfaceVariable::WindSpeed50m => "wind_speed_50m",
            SurfaceVariable::WindDirection50m => "wind_direction_50m",
            SurfaceVariable::SnowfallWaterEquivalent => "snowfall_water_equivalent",
            SurfaceVariable::SnowfallWaterEquivalentConvective => {
                "snowfall_water_equivalent_convective"
            }
            SurfaceVariable::Showers => "showers",
            SurfaceVariable::Precipitation => "precipitation",
            SurfaceVariable::WindGusts10m => "wind_gusts_10m",
            SurfaceVariable::ShortwaveRadiation => "shortwave_radiation",
            SurfaceVariable::DirectRadiation => "direct_radiation",
            SurfaceVariable::SurfaceTemperature => "surface_temperature",
            SurfaceVariable::Cape => "cape",
            SurfaceVariable::Visibility => "visibility",
        }
    }
}

impl WeatherVariable for SurfaceVariable {
    fn storage_key(&self) -> StorageKey {
        StorageKey::new(self.name())
    }

    fn scale_factor(&self) -> f32 {
        match self {
            SurfaceVariable::Temperature2m | SurfaceVariable::SurfaceTemperature => 20.0,
            SurfaceVariable::CloudCoverLow
            | SurfaceVariable::CloudCoverMid
            | SurfaceVariable::CloudCoverHigh
            | SurfaceVariable::CloudCover2m => 1.0,
            SurfaceVariable::RelativeHumidity2m => 1.0,
            SurfaceVariable::Precipitation | SurfaceVariable::Showers => 10.0,
            SurfaceVariable::WindGusts10m => 10.0,
            SurfaceVariable::PressureMsl => 10.0,
            SurfaceVariable::ShortwaveRadiation | SurfaceVariable::DirectRadiation => 1.0,
            SurfaceVariable::SnowfallWaterEquivalent
            | SurfaceVariable::SnowfallWaterEquivalentConvective => 10.0,
            SurfaceVariable::WindSpeed10m | SurfaceVariable::WindSpeed50m => 10.0,
            SurfaceVariable::WindDirection10m | SurfaceVariable::WindDirection50m => 1.0,
            SurfaceVariable::Cape => 0.1,
            SurfaceVariable::Visibility => 0.05, // 20 metre steps
        }
    }

    fn interpolation(&self) -> InterpolationPolicy {
        match self {
            SurfaceVariable::Temperature2m | SurfaceVariable::SurfaceTemperature => {
                InterpolationPolicy::Hermite { bounds: None }
            }
            SurfaceVariable::CloudCoverLow
            | SurfaceVariable::CloudCoverMid
            | SurfaceVariable::CloudCoverHigh
            | SurfaceVariable::CloudCover2m => InterpolationPolicy::Hermite {
                bounds: Some(Bounds::new(0.0, 100.0)),
            },
            SurfaceVariable::PressureMsl => InterpolationPolicy::Hermite { bounds: None },
            SurfaceVariable::RelativeHumidity2m => InterpolationPolicy::Hermite {
                bounds: Some(Bounds::new(0.0, 100.0)),
            },
            SurfaceVariable::Precipitation | SurfaceVariable::Showers => {
                InterpolationPolicy::BackwardsSum
            }
            SurfaceVariable::SnowfallWaterEquivalent
            | SurfaceVariable::SnowfallWaterEquivalentConvective => {
                InterpolationPolicy::BackwardsSum
            }
            SurfaceVariable::WindGusts10m => InterpolationPolicy::Hermite { bounds: None },
            SurfaceVariable::ShortwaveRadiation | SurfaceVariable::DirectRadiation => {
                InterpolationPolicy::SolarBackwardsAveraged
            }
            SurfaceVariable::Cape => InterpolationPolicy::Hermite {
                bounds: Some(Bounds::new(0.0, 1.0e10)),
            },
            SurfaceVariable::Visibility => InterpolationPolicy::Linear,
            SurfaceVariable::WindSpeed10m | SurfaceVariable::WindSpeed50m => {
                InterpolationPolicy::Hermite {
                    bounds: Some(Bounds::new(0.0, 1.0e10)),
                }
            }
            SurfaceVariable::WindDirection10m | SurfaceVariable::WindDirection50m => {
                InterpolationPolicy::LinearDegrees
            }
        }
    }

    fn unit(&self) -> SiUnit {
        match self {
            SurfaceVariable::Temperature2m | SurfaceVariable::SurfaceTemperature => SiUnit::Celsius,
            SurfaceVariable::CloudCoverLow
            | SurfaceVariable::CloudCoverMid
            | SurfaceVariable::CloudCoverHigh
            | SurfaceVariable::CloudCover2m => SiUnit::Percentage,
            SurfaceVariable::RelativeHumidity2m => SiUnit::Percentage,
            SurfaceVariable::Precipitation | SurfaceVariable::Showers => SiUnit::Millimetre,
            SurfaceVariable::WindGusts10m => SiUnit::MetrePerSecond,
            SurfaceVariable::PressureMsl => SiUnit::Hectopascal,
            SurfaceVariable::ShortwaveRadiation | SurfaceVariable::DirectRadiation => {
                SiUnit::WattPerSquareMetre
            }
            SurfaceVariable::SnowfallWaterEquivalent
            | SurfaceVariable::SnowfallWaterEquivalentConvective => SiUnit::Millimetre,
            SurfaceVariable::Cape => SiUnit::JoulePerKilogram,
            SurfaceVariable::Visibility => SiUnit::Metre,
            SurfaceVariable::WindSpeed10m | SurfaceVariable::WindSpeed50m => SiUnit::MetrePerSecond,
            SurfaceVariable::WindDirection10m | SurfaceVariable::WindDirection50m => {
                SiUnit::DegreeDirection
            }
        }
    }

    fn is_elevation_correctable(&self) -> bool {
        match self {
            SurfaceVariable::Temperature2m | SurfaceVariable::SurfaceTemperature => true,
            SurfaceVariable::CloudCoverLow
            | SurfaceVariable::CloudCoverMid
            | SurfaceVariable::CloudCoverHigh
            | SurfaceVariable::CloudCover2m
            | SurfaceVariable::PressureMsl
            | SurfaceVariable::RelativeHumidity2m
            | SurfaceVariable::WindSpeed10m
            | SurfaceVariable::WindDirection10m
            | SurfaceVariable::WindSpeed50m
            | SurfaceVariable::WindDirection50m
            | SurfaceVariable::SnowfallWaterEquivalent
            | SurfaceVariable::SnowfallWaterEquivalentConvective
            | SurfaceVariable::Showers
            | SurfaceVariable::Precipitation
            | SurfaceVariable::WindGusts10m
            | SurfaceVariable::ShortwaveRadiation
            | SurfaceVariable::DirectRadiation
            | SurfaceVariable::Cape
            | SurfaceVariable::Visibility => false,
        }
    }

    fn store_previous_forecast(&self) -> bool {
        match self {
            SurfaceVariable::Temperature2m | SurfaceVariable::RelativeHumidity2m => true,
            SurfaceVariable::Precipitation | SurfaceVariable::SnowfallWaterEquivalent => true,
            SurfaceVariable::WindSpeed10m | SurfaceVariable::WindDirection10m => true,
            SurfaceVariable::PressureMsl => true,
            SurfaceVariable::CloudCoverMid
            | SurfaceVariable::CloudCoverLow
            | SurfaceVariable::CloudCoverHigh => true,
            SurfaceVariable::ShortwaveRadiation | SurfaceVariable::DirectRadiation => true,
            SurfaceVariable::WindGusts10m => true,
            SurfaceVariable::Cape => true,
            SurfaceVariable::Visibility => true,
            SurfaceVariable::CloudCover2m
            | SurfaceVariable::WindSpeed50m
            | SurfaceVariable::WindDirection50m
            | SurfaceVariable::SnowfallWaterEquivalentConvective
            | SurfaceVariable::Showers
            | SurfaceVariable::SurfaceTemperature => false,
        }
    }
}

impl fmt::Display for SurfaceVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SurfaceVariable {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| RegistryError::UnknownVariable(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factors_positive_and_finite() {
        for variable in SurfaceVariable::iter() {
            let scale = variable.scale_factor();
            assert!(scale > 0.0, "{} has non-positive scale factor", variable);
            assert!(scale.is_finite(), "{} has non-finite scale factor", variable);
        }
    }

    #[test]
    fn test_storage_keys_are_stable() {
        for variable in SurfaceVariable::iter() {
            let key = variable.storage_key();
            assert_eq!(key.name, variable.name());
            assert_eq!(key.level_index, 0);
        }
    }

    #[test]
    fn test_elevation_correctable_only_for_temperatures() {
        for variable in SurfaceVariable::iter() {
            let expected = matches!(
                variable,
                SurfaceVariable::Temperature2m | SurfaceVariable::SurfaceTemperature
            );
            assert_eq!(variable.is_elevation_correctable(), expected);
        }
    }

    #[test]
    fn test_previous_forecast_allow_list() {
        assert!(SurfaceVariable::Temperature2m.store_previous_forecast());
        assert!(SurfaceVariable::Precipitation.store_previous_forecast());
        assert!(SurfaceVariable::CloudCoverHigh.store_previous_forecast());
        assert!(SurfaceVariable::Visibility.store_previous_forecast());

        assert!(!SurfaceVariable::SurfaceTemperature.store_previous_forecast());
        assert!(!SurfaceVariable::CloudCover2m.store_previous_forecast());
        assert!(!SurfaceVariable::WindSpeed50m.store_previous_forecast());
        assert!(!SurfaceVariable::WindDirection50m.store_previous_forecast());
        assert!(!SurfaceVariable::Showers.store_previous_forecast());
        assert!(!SurfaceVariable::SnowfallWaterEquivalentConvective.store_previous_forecast());
    }

    #[test]
    fn test_accumulating_fluxes_use_backwards_sum() {
        assert_eq!(
            SurfaceVariable::Precipitation.interpolation(),
            InterpolationPolicy::BackwardsSum
        );
        assert_eq!(
            SurfaceVariable::SnowfallWaterEquivalent.interpolation(),
            InterpolationPolicy::BackwardsSum
        );
        assert!(SurfaceVariable::ShortwaveRadiation
            .interpolation()
            .is_solar_interpolated());
    }

    #[test]
    fn test_wind_direction_is_circular() {
        assert_eq!(
            SurfaceVariable::WindDirection10m.interpolation(),
            InterpolationPolicy::LinearDegrees
        );
        assert_eq!(SurfaceVariable::WindDirection10m.unit(), SiUnit::DegreeDirection);
    }

    #[test]
    fn test_name_round_trip() {
        for variable in SurfaceVariable::iter() {
            let parsed: SurfaceVariable = variable.name().parse().unwrap();
            assert_eq!(parsed, variable);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert!("cloud_cover".parse::<SurfaceVariable>().is_err());
        assert!("snow_depth_water_equivalent".parse::<SurfaceVariable>().is_err());
        assert!("".parse::<SurfaceVariable>().is_err());
    }
}
