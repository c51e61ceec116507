//! Cost Schema Documentation
//!
//! Self-documenting schema for input fields and derived cost metrics.
//! Generated from code metadata for CLI and Python consumption.

use serde::{Deserialize, Serialize};

use super::model::DerivedMetrics;
use crate::inputs::{Field, FieldGroup, FieldRole, InputConstraints, InputParameters, Variant};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Category for grouping schema entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CostCategory {
    /// User-editable input
    Input,
    /// Derived cost per mile
    PerMile,
    /// Derived yearly total
    Annual,
    /// Outcome of comparing EV/PHEV against gas
    Comparison,
}

/// Example calculation for a schema entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostExample {
    /// Scenario description
    pub scenario: String,
    /// Input values as (name, value) pairs
    pub inputs: Vec<(String, String)>,
    /// Calculation steps
    pub calculation: String,
    /// Final result
    pub result: String,
}

/// Documentation for a single input or metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostElement {
    /// Wire name (e.g., "gasFuelCostPerMile")
    pub name: String,

    /// Human-readable display name (e.g., "Fuel Cost per Mile")
    pub display_name: String,

    pub category: CostCategory,

    pub description: String,

    /// Formula (plain text); inputs show their normalization rule
    pub formula: String,

    /// Default for the simple variant
    pub default_value: String,

    /// Default for the PHEV variant, when it differs
    pub phev_default_value: Option<String>,

    pub unit: String,

    /// Substitute for invalid input (inputs only)
    pub fallback: Option<String>,

    /// Form control constraints (inputs only)
    pub constraints: Option<InputConstraints>,

    /// Form section the input belongs to (inputs only)
    pub group: Option<FieldGroup>,

    /// Rust source file location
    pub source_location: String,

    pub see_also: Vec<String>,

    pub example: Option<CostExample>,
}

/// Complete cost schema documentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSchemaDoc {
    pub version: String,
    pub generated_at: String,
    pub cost_types: Vec<CostElement>,
}

/// Trait for types that can provide cost schema documentation
pub trait CostSchemaDocumented {
    fn schema_docs() -> Vec<CostElement>;
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn input_description(field: Field) -> &'static str {
    match field {
        Field::EvRoadTax => "Flat annual fee for owning an EV, spread over annual mileage.",
        Field::ElectricityCost => "Price paid per kWh of charging energy.",
        Field::MilesPerKwh => "Distance the EV travels per kWh.",
        Field::PhevGasPercentage => {
            "Share of PHEV miles driven on gasoline. The electric share is the remainder."
        }
        Field::MaintenanceCost => "Cost of one routine gas-vehicle maintenance service.",
        Field::MaintenanceMiles => "Miles driven between gas-vehicle maintenance services.",
        Field::GasPrice => "Price per gallon of gasoline.",
        Field::Mpg => "Distance the gas vehicle travels per gallon.",
        Field::AnnualMiles => "Total miles driven per year.",
    }
}

fn normalization_rule(role: FieldRole) -> &'static str {
    match role {
        FieldRole::Cost => "parsed number; invalid or 0 -> 0",
        FieldRole::Divisor => "parsed number; invalid, 0 or subnormal -> 1",
        FieldRole::Percentage => "clamp(parsed number, 0, 100); empty or invalid -> 0",
    }
}

fn format_default(value: Option<f64>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

impl CostSchemaDocumented for InputParameters {
    fn schema_docs() -> Vec<CostElement> {
        Field::ALL
            .into_iter()
            .map(|field| {
                let simple = field.default_value(Variant::Simple);
                let phev = field.default_value(Variant::Phev);
                let constraints = field.constraints();
                CostElement {
                    name: field.wire_name().to_string(),
                    display_name: field.label().to_string(),
                    category: CostCategory::Input,
                    description: input_description(field).to_string(),
                    formula: normalization_rule(field.role()).to_string(),
                    default_value: format_default(simple),
                    phev_default_value: (phev != simple).then(|| format_default(phev)),
                    unit: field.unit().to_string(),
                    fallback: Some(field.role().fallback().to_string()),
                    constraints: (constraints != InputConstraints::default()).then_some(constraints),
                    group: Some(field.group()),
                    source_location: "backend/src/inputs/field.rs".to_string(),
                    see_also: Vec::new(),
                    example: None,
                }
            })
            .collect()
    }
}

struct MetricDoc<'a> {
    name: &'a str,
    display_name: &'a str,
    category: CostCategory,
    description: &'a str,
    formula: &'a str,
    default_value: &'a str,
    unit: &'a str,
    see_also: &'a [&'a str],
    example: Option<CostExample>,
}

impl MetricDoc<'_> {
    fn into_element(self) -> CostElement {
        CostElement {
            name: self.name.to_string(),
            display_name: self.display_name.to_string(),
            category: self.category,
            description: self.description.to_string(),
            formula: self.formula.to_string(),
            default_value: self.default_value.to_string(),
            phev_default_value: None,
            unit: self.unit.to_string(),
            fallback: None,
            constraints: None,
            group: None,
            source_location: "backend/src/costs/model.rs".to_string(),
            see_also: strings(self.see_also),
            example: self.example,
        }
    }
}

impl CostSchemaDocumented for DerivedMetrics {
    fn schema_docs() -> Vec<CostElement> {
        vec![
            MetricDoc {
                name: "gasFuelCostPerMile",
                display_name: "Gas Fuel Cost per Mile",
                category: CostCategory::PerMile,
                description: "Gasoline spend for one mile.",
                formula: "gasPrice / mpg",
                default_value: "0.1400",
                unit: "$/mile",
                see_also: &["gasPrice", "mpg"],
                example: Some(CostExample {
                    scenario: "Gas at $3.50 in a 25 MPG car".to_string(),
                    inputs: vec![
                        ("gasPrice".to_string(), "3.5".to_string()),
                        ("mpg".to_string(), "25".to_string()),
                    ],
                    calculation: "3.5 / 25".to_string(),
                    result: "$0.1400 per mile".to_string(),
                }),
            },
            MetricDoc {
                name: "gasMaintenancePerMile",
                display_name: "Gas Maintenance per Mile",
                category: CostCategory::PerMile,
                description: "Routine maintenance spread over the service interval.",
                formula: "maintenanceCost / maintenanceMiles",
                default_value: "0.0100",
                unit: "$/mile",
                see_also: &["maintenanceCost", "maintenanceMiles"],
                example: Some(CostExample {
                    scenario: "$50 service every 5000 miles".to_string(),
                    inputs: vec![
                        ("maintenanceCost".to_string(), "50".to_string()),
                        ("maintenanceMiles".to_string(), "5000".to_string()),
                    ],
                    calculation: "50 / 5000".to_string(),
                    result: "$0.0100 per mile".to_string(),
                }),
            },
            MetricDoc {
                name: "gasTotalCostPerMile",
                display_name: "Gas Total Cost per Mile",
                category: CostCategory::PerMile,
                description: "Fuel plus maintenance for the gas vehicle.",
                formula: "gasFuelCostPerMile + gasMaintenancePerMile",
                default_value: "0.1500",
                unit: "$/mile",
                see_also: &["gasFuelCostPerMile", "gasMaintenancePerMile"],
                example: None,
            },
            MetricDoc {
                name: "evFuelCostPerMile",
                display_name: "EV Energy Cost per Mile",
                category: CostCategory::PerMile,
                description: "Charging energy spend for one mile.",
                formula: "electricityCost / milesPerKwh",
                default_value: "0.0433",
                unit: "$/mile",
                see_also: &["electricityCost", "milesPerKwh"],
                example: Some(CostExample {
                    scenario: "$0.13 per kWh at 3 miles per kWh".to_string(),
                    inputs: vec![
                        ("electricityCost".to_string(), "0.13".to_string()),
                        ("milesPerKwh".to_string(), "3".to_string()),
                    ],
                    calculation: "0.13 / 3".to_string(),
                    result: "$0.0433 per mile".to_string(),
                }),
            },
            MetricDoc {
                name: "evRoadTaxPerMile",
                display_name: "EV Road Tax per Mile",
                category: CostCategory::PerMile,
                description: "Annual EV fee spread over annual mileage.",
                formula: "evRoadTax / annualMiles",
                default_value: "0.0083",
                unit: "$/mile",
                see_also: &["evRoadTax", "annualMiles"],
                example: Some(CostExample {
                    scenario: "$100 yearly fee over 12000 miles".to_string(),
                    inputs: vec![
                        ("evRoadTax".to_string(), "100".to_string()),
                        ("annualMiles".to_string(), "12000".to_string()),
                    ],
                    calculation: "100 / 12000".to_string(),
                    result: "$0.0083 per mile".to_string(),
                }),
            },
            MetricDoc {
                name: "phevBlendedCostPerMile",
                display_name: "PHEV Blended Cost per Mile",
                category: CostCategory::PerMile,
                description: "Gas total and EV energy cost weighted by the usage split. \
                    Only present when a PHEV gas percentage is set.",
                formula: "gasTotalCostPerMile * gasFraction + evFuelCostPerMile * electricFraction",
                default_value: "none",
                unit: "$/mile",
                see_also: &["phevGasPercentage", "gasTotalCostPerMile", "evFuelCostPerMile"],
                example: Some(CostExample {
                    scenario: "Half the miles on gas".to_string(),
                    inputs: vec![
                        ("phevGasPercentage".to_string(), "50".to_string()),
                        ("gasTotalCostPerMile".to_string(), "0.15".to_string()),
                        ("evFuelCostPerMile".to_string(), "0.0433".to_string()),
                    ],
                    calculation: "0.15 * 0.5 + 0.0433 * 0.5".to_string(),
                    result: "$0.0967 per mile".to_string(),
                }),
            },
            MetricDoc {
                name: "evTotalCostPerMile",
                display_name: "EV Total Cost per Mile",
                category: CostCategory::PerMile,
                description: "Energy (or PHEV blend) plus road tax.",
                formula: "(phevBlendedCostPerMile or evFuelCostPerMile) + evRoadTaxPerMile",
                default_value: "0.0517",
                unit: "$/mile",
                see_also: &["evFuelCostPerMile", "phevBlendedCostPerMile", "evRoadTaxPerMile"],
                example: None,
            },
            MetricDoc {
                name: "annualEvTotalCost",
                display_name: "EV Annual Cost",
                category: CostCategory::Annual,
                description: "EV total per mile over a year of driving.",
                formula: "evTotalCostPerMile * annualMiles",
                default_value: "620",
                unit: "$/year",
                see_also: &["evTotalCostPerMile", "annualMiles"],
                example: None,
            },
            MetricDoc {
                name: "annualGasTotalCost",
                display_name: "Gas Annual Cost",
                category: CostCategory::Annual,
                description: "Gas total per mile over a year of driving.",
                formula: "gasTotalCostPerMile * annualMiles",
                default_value: "1800",
                unit: "$/year",
                see_also: &["gasTotalCostPerMile", "annualMiles"],
                example: None,
            },
            MetricDoc {
                name: "costDifferencePerMile",
                display_name: "Cost Difference per Mile",
                category: CostCategory::Comparison,
                description: "Absolute gap between the EV and gas totals.",
                formula: "|evTotalCostPerMile - gasTotalCostPerMile|",
                default_value: "0.0983",
                unit: "$/mile",
                see_also: &["winner"],
                example: None,
            },
            MetricDoc {
                name: "winner",
                display_name: "Cheaper Vehicle",
                category: CostCategory::Comparison,
                description: "ev_cheaper, gas_cheaper, or equal when the totals match exactly.",
                formula: "sign(gasTotalCostPerMile - evTotalCostPerMile)",
                default_value: "ev_cheaper",
                unit: "category",
                see_also: &["costDifferencePerMile"],
                example: None,
            },
        ]
        .into_iter()
        .map(MetricDoc::into_element)
        .collect()
    }
}

/// Generate the full schema as pretty JSON
pub fn get_cost_schema() -> String {
    let mut cost_types = InputParameters::schema_docs();
    cost_types.extend(DerivedMetrics::schema_docs());

    let schema = CostSchemaDoc {
        version: "1.0".to_string(),
        generated_at: "2025-01-01T00:00:00Z".to_string(), // Static for determinism
        cost_types,
    };

    serde_json::to_string_pretty(&schema).expect("Schema serialization should not fail")
}
