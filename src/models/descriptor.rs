use serde::{Deserialize, Serialize};

use crate::models::interpolation::InterpolationPolicy;
use crate::models::units::SiUnit;

/// Location of a variable's processed data in the storage layer
///
/// `level_index` is always 0 in this registry; the field is reserved for
/// future multi-level packing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageKey {
    pub name: String,
    pub level_index: usize,
}

impl StorageKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level_index: 0,
        }
    }
}

/// Snapshot of every policy fact the pipeline needs for one variable
///
/// The storage layer consumes `scale_factor` and `storage_key`; the temporal
/// resampler consumes `interpolation`, `unit`, `is_elevation_correctable`
/// and `store_previous_forecast`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDescriptor {
    pub storage_key: StorageKey,
    pub scale_factor: f32,
    pub interpolation: InterpolationPolicy,
    pub unit: SiUnit,
    pub is_elevation_correctable: bool,
    pub store_previous_forecast: bool,
}

/// The policy contract every variable satisfies, surface or pressure level
///
/// Implementations are pure value computations over the variable identity:
/// no state, no I/O, safe to query from any thread.
pub trait WeatherVariable {
    /// Where processed data for this variable is persisted
    fn storage_key(&self) -> StorageKey;

    /// Quantization step size for the lossy fixed-point compressor; always
    /// strictly positive and finite over the nominal level domain
    fn scale_factor(&self) -> f32;

    /// How to reconstruct values between known samples
    fn interpolation(&self) -> InterpolationPolicy;

    /// Canonical physical unit, fixed per variable identity
    fn unit(&self) -> SiUnit;

    /// Whether a downstream stage may adjust values for terrain height
    fn is_elevation_correctable(&self) -> bool;

    /// Whether the forecast-mixing stage retains the prior model run's value
    fn store_previous_forecast(&self) -> bool;

    fn descriptor(&self) -> VariableDescriptor {
        VariableDescriptor {
            storage_key: self.storage_key(),
            scale_factor: self.scale_factor(),
            interpolation: self.interpolation(),
            unit: self.unit(),
            is_elevation_correctable: self.is_elevation_correctable(),
            store_previous_forecast: self.store_previous_forecast(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_level_index_is_reserved() {
        let key = StorageKey::new("temperature_2m");
        assert_eq!(key.name, "temperature_2m");
        assert_eq!(key.level_index, 0);
    }
}
