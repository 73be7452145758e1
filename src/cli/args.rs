use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kma-registry")]
#[command(about = "Variable metadata and interpolation-policy registry for KMA model pipelines")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every surface variable with its storage and resampling policy
    List {
        #[arg(long, help = "Emit machine-readable JSON instead of a table")]
        json: bool,
    },

    /// Show the full descriptor for one variable
    Describe {
        #[arg(help = "Variable name, e.g. 'temperature_2m' or 'relative_humidity_850hPa'")]
        variable: String,

        #[arg(long, help = "Emit machine-readable JSON instead of a table")]
        json: bool,
    },

    /// Tabulate compression scale factors across pressure levels
    PressureTable {
        #[arg(help = "Pressure variable type, e.g. 'temperature' or 'wind_u_component'")]
        variable_type: String,

        #[arg(
            long,
            value_delimiter = ',',
            default_value = "1000,925,850,700,500,400,300,250,200,150,100,50",
            help = "Levels in hPa"
        )]
        levels: Vec<u32>,
    },
}
