use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use evvgas_core_rs::{Field, Variant};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Pure EV comparison
    Simple,
    /// Plug-in hybrid with a gas/electric usage split
    Phev,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Simple => Variant::Simple,
            VariantArg::Phev => Variant::Phev,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable results panel
    Text,
    /// Inputs and metrics as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "evvgas")]
#[command(about = "EV vs gas cost per mile calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute cost per mile for EV/PHEV and gas
    Compute {
        /// Default parameter set (overrides the parameter file's variant)
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,

        /// JSON parameter file keyed by field name
        #[arg(short, long)]
        params: Option<PathBuf>,

        #[command(flatten)]
        fields: FieldArgs,

        /// Include annual totals
        #[arg(long)]
        annual: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the cost schema documentation as JSON
    Schema,

    /// List input fields with defaults and constraints
    Fields {
        /// Variant whose defaults are shown
        #[arg(long, value_enum, default_value = "simple")]
        variant: VariantArg,
    },
}

/// Raw field values, normalized exactly like form input
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// EV road tax ($ per year)
    #[arg(long, allow_hyphen_values = true)]
    pub ev_road_tax: Option<String>,

    /// Electricity cost ($ per kWh)
    #[arg(long, allow_hyphen_values = true)]
    pub electricity_cost: Option<String>,

    /// EV efficiency (miles per kWh)
    #[arg(long, allow_hyphen_values = true)]
    pub miles_per_kwh: Option<String>,

    /// Share of PHEV miles on gasoline (0-100); enables the PHEV blend
    #[arg(long, allow_hyphen_values = true)]
    pub phev_gas_percentage: Option<String>,

    /// Gas car maintenance cost ($ per service)
    #[arg(long, allow_hyphen_values = true)]
    pub maintenance_cost: Option<String>,

    /// Gas car maintenance interval (miles)
    #[arg(long, allow_hyphen_values = true)]
    pub maintenance_miles: Option<String>,

    /// Gas price ($ per gallon)
    #[arg(long, allow_hyphen_values = true)]
    pub gas_price: Option<String>,

    /// Gas car efficiency (miles per gallon)
    #[arg(long, allow_hyphen_values = true)]
    pub mpg: Option<String>,

    /// Annual miles driven
    #[arg(long, allow_hyphen_values = true)]
    pub annual_miles: Option<String>,
}

impl FieldArgs {
    /// Edits given on the command line, in form order
    pub fn edits(&self) -> Vec<(Field, &str)> {
        [
            (Field::EvRoadTax, &self.ev_road_tax),
            (Field::ElectricityCost, &self.electricity_cost),
            (Field::MilesPerKwh, &self.miles_per_kwh),
            (Field::PhevGasPercentage, &self.phev_gas_percentage),
            (Field::MaintenanceCost, &self.maintenance_cost),
            (Field::MaintenanceMiles, &self.maintenance_miles),
            (Field::GasPrice, &self.gas_price),
            (Field::Mpg, &self.mpg),
            (Field::AnnualMiles, &self.annual_miles),
        ]
        .into_iter()
        .filter_map(|(field, raw)| raw.as_deref().map(|raw| (field, raw)))
        .collect()
    }
}
