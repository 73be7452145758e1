pub mod combined;
pub mod descriptor;
pub mod interpolation;
pub mod pressure;
pub mod surface;
pub mod units;

pub use combined::Variable;
pub use descriptor::{StorageKey, VariableDescriptor, WeatherVariable};
pub use interpolation::{Bounds, InterpolationPolicy};
pub use pressure::{PressureVariable, PressureVariableType};
pub use surface::SurfaceVariable;
pub use units::SiUnit;
