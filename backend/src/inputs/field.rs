//! Editable input fields and their metadata
//!
//! Every user-editable parameter is identified by a [`Field`]. The field
//! knows how it is labelled on the form, which fallback applies when its
//! value is invalid, and which min/max/step constraints the form control
//! carries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Product variant, selecting the default parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Pure EV comparison (no gasoline blending)
    #[default]
    Simple,
    /// Plug-in hybrid comparison with a gas/electric usage split
    Phev,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Simple => "simple",
            Variant::Phev => "phev",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "ev" => Ok(Variant::Simple),
            "phev" => Ok(Variant::Phev),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

/// How a field's raw value is normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// Cost, tax or price. Invalid input falls back to 0.
    Cost,
    /// Used as a divisor. Invalid input falls back to 1.
    Divisor,
    /// Percentage clamped to [0, 100]. Empty or invalid input is 0.
    Percentage,
}

impl FieldRole {
    /// Value substituted for invalid input
    pub fn fallback(&self) -> f64 {
        match self {
            FieldRole::Cost | FieldRole::Percentage => 0.0,
            FieldRole::Divisor => 1.0,
        }
    }
}

/// Form section a field is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    Ev,
    Gas,
    Shared,
}

impl FieldGroup {
    /// Section heading as shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            FieldGroup::Ev => "EV",
            FieldGroup::Gas => "Gas Car",
            FieldGroup::Shared => "Shared",
        }
    }
}

/// Numeric control constraints (HTML `min`/`max`/`step` equivalents)
///
/// Constraints are advisory for the presentation layer. Normalization
/// only enforces the percentage clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct InputConstraints {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

/// A user-editable input parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    EvRoadTax,
    ElectricityCost,
    MilesPerKwh,
    PhevGasPercentage,
    MaintenanceCost,
    MaintenanceMiles,
    GasPrice,
    Mpg,
    AnnualMiles,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 9] = [
        Field::EvRoadTax,
        Field::ElectricityCost,
        Field::MilesPerKwh,
        Field::PhevGasPercentage,
        Field::MaintenanceCost,
        Field::MaintenanceMiles,
        Field::GasPrice,
        Field::Mpg,
        Field::AnnualMiles,
    ];

    /// Name used in parameter files, JSON output and the Python binding
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::EvRoadTax => "evRoadTax",
            Field::ElectricityCost => "electricityCost",
            Field::MilesPerKwh => "milesPerKwh",
            Field::PhevGasPercentage => "phevGasPercentage",
            Field::MaintenanceCost => "maintenanceCost",
            Field::MaintenanceMiles => "maintenanceMiles",
            Field::GasPrice => "gasPrice",
            Field::Mpg => "mpg",
            Field::AnnualMiles => "annualMiles",
        }
    }

    /// Command-line flag name (without leading dashes)
    pub fn flag_name(&self) -> &'static str {
        match self {
            Field::EvRoadTax => "ev-road-tax",
            Field::ElectricityCost => "electricity-cost",
            Field::MilesPerKwh => "miles-per-kwh",
            Field::PhevGasPercentage => "phev-gas-percentage",
            Field::MaintenanceCost => "maintenance-cost",
            Field::MaintenanceMiles => "maintenance-miles",
            Field::GasPrice => "gas-price",
            Field::Mpg => "mpg",
            Field::AnnualMiles => "annual-miles",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            Field::EvRoadTax => "EV Road Tax ($ per year)",
            Field::ElectricityCost => "Electricity Cost ($ per kWh)",
            Field::MilesPerKwh => "Miles per kWh",
            Field::PhevGasPercentage => "PHEV Gas Usage (% of miles)",
            Field::MaintenanceCost => "Maintenance Cost ($ per service)",
            Field::MaintenanceMiles => "Maintenance Interval (miles)",
            Field::GasPrice => "Gas Price ($ per gallon)",
            Field::Mpg => "Miles per Gallon (MPG)",
            Field::AnnualMiles => "Annual Miles Driven",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Field::EvRoadTax => "$/year",
            Field::ElectricityCost => "$/kWh",
            Field::MilesPerKwh => "miles/kWh",
            Field::PhevGasPercentage => "percent",
            Field::MaintenanceCost => "$/service",
            Field::MaintenanceMiles => "miles",
            Field::GasPrice => "$/gallon",
            Field::Mpg => "miles/gallon",
            Field::AnnualMiles => "miles/year",
        }
    }

    pub fn role(&self) -> FieldRole {
        match self {
            Field::EvRoadTax | Field::ElectricityCost | Field::MaintenanceCost | Field::GasPrice => {
                FieldRole::Cost
            }
            Field::MilesPerKwh | Field::MaintenanceMiles | Field::Mpg | Field::AnnualMiles => {
                FieldRole::Divisor
            }
            Field::PhevGasPercentage => FieldRole::Percentage,
        }
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            Field::EvRoadTax
            | Field::ElectricityCost
            | Field::MilesPerKwh
            | Field::PhevGasPercentage => FieldGroup::Ev,
            Field::MaintenanceCost | Field::MaintenanceMiles | Field::GasPrice | Field::Mpg => {
                FieldGroup::Gas
            }
            Field::AnnualMiles => FieldGroup::Shared,
        }
    }

    pub fn constraints(&self) -> InputConstraints {
        match self {
            Field::ElectricityCost | Field::GasPrice => InputConstraints {
                step: Some(0.01),
                ..Default::default()
            },
            Field::MilesPerKwh | Field::Mpg => InputConstraints {
                step: Some(0.1),
                ..Default::default()
            },
            Field::PhevGasPercentage => InputConstraints {
                min: Some(0.0),
                max: Some(100.0),
                step: Some(1.0),
            },
            _ => InputConstraints::default(),
        }
    }

    /// Default value for a variant
    ///
    /// Returns `None` for the PHEV percentage in the simple variant, which
    /// has no usage split at all.
    pub fn default_value(&self, variant: Variant) -> Option<f64> {
        let phev = variant == Variant::Phev;
        match self {
            Field::EvRoadTax => Some(if phev { 140.0 } else { 100.0 }),
            Field::ElectricityCost => Some(0.13),
            Field::MilesPerKwh => Some(if phev { 4.5 } else { 3.0 }),
            Field::PhevGasPercentage => phev.then_some(0.0),
            Field::MaintenanceCost => Some(if phev { 90.0 } else { 50.0 }),
            Field::MaintenanceMiles => Some(5000.0),
            Field::GasPrice => Some(if phev { 2.99 } else { 3.5 }),
            Field::Mpg => Some(25.0),
            Field::AnnualMiles => Some(12000.0),
        }
    }

    /// Resolve a field from its wire name, flag name or snake_case name
    pub fn parse(name: &str) -> Result<Field, ConfigError> {
        let wanted = name.trim();
        let snake = wanted.replace('-', "_");
        Field::ALL
            .into_iter()
            .find(|f| {
                f.wire_name() == wanted
                    || f.flag_name() == wanted
                    || f.flag_name().replace('-', "_") == snake
            })
            .ok_or_else(|| ConfigError::UnknownField(wanted.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Field {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::parse(s)
    }
}
