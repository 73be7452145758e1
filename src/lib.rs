pub mod cli;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{RegistryError, Result};
pub use models::{Variable, VariableDescriptor, WeatherVariable};
