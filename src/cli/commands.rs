use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::{
    PressureVariable, PressureVariableType, SurfaceVariable, Variable, VariableDescriptor,
    WeatherVariable,
};

pub fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
        debug!("verbose logging enabled");
    }

    match cli.command {
        Commands::List { json } => {
            if json {
                let descriptors: Vec<VariableDescriptor> = SurfaceVariable::iter()
                    .map(|v| v.descriptor())
                    .collect();
                println!("{}", serde_json::to_string_pretty(&descriptors)?);
                return Ok(());
            }

            println!(
                "{:<38} {:>8} {:<26} {:>6} {:>5} {:>5}",
                "variable", "scale", "interpolation", "unit", "elev", "prev"
            );
            for variable in SurfaceVariable::iter() {
                println!(
                    "{:<38} {:>8} {:<26} {:>6} {:>5} {:>5}",
                    variable.name(),
                    variable.scale_factor(),
                    policy_label(&variable),
                    variable.unit().abbreviation(),
                    variable.is_elevation_correctable(),
                    variable.store_previous_forecast(),
                );
            }
        }

        Commands::Describe { variable, json } => {
            let variable: Variable = variable.parse()?;
            let descriptor = variable.descriptor();

            if json {
                println!("{}", serde_json::to_string_pretty(&descriptor)?);
                return Ok(());
            }

            println!("Variable: {}", variable);
            println!("Storage key: {} (level index {})",
                descriptor.storage_key.name, descriptor.storage_key.level_index);
            println!("Scale factor: {}", descriptor.scale_factor);
            println!("Interpolation: {}", policy_label(&variable));
            println!("Unit: {}", descriptor.unit.abbreviation());
            println!("Elevation correctable: {}", descriptor.is_elevation_correctable);
            println!("Store previous forecast: {}", descriptor.store_previous_forecast);
        }

        Commands::PressureTable {
            variable_type,
            levels,
        } => {
            let variable_type: PressureVariableType = variable_type.parse()?;

            println!("{:<10} {:>12}", "hPa", "scale");
            for level in levels {
                let variable = PressureVariable::new(variable_type, level);
                println!("{:<10} {:>12.4}", level, variable.scale_factor());
            }
        }
    }

    Ok(())
}

fn policy_label(variable: &impl WeatherVariable) -> String {
    use crate::models::InterpolationPolicy;

    match variable.interpolation() {
        InterpolationPolicy::Hermite { bounds: None } => "hermite".to_string(),
        InterpolationPolicy::Hermite {
            bounds: Some(bounds),
        } => format!("hermite [{}, {}]", bounds.lower, bounds.upper),
        InterpolationPolicy::BackwardsSum => "backwards_sum".to_string(),
        InterpolationPolicy::SolarBackwardsAveraged => "solar_backwards_averaged".to_string(),
        InterpolationPolicy::Linear => "linear".to_string(),
        InterpolationPolicy::LinearDegrees => "linear_degrees".to_string(),
    }
}
