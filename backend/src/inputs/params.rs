//! Input parameter set
//!
//! [`RawInputs`] holds the text of each field exactly as it was edited.
//! [`InputParameters`] holds the normalized numbers the cost model reads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::{Field, Variant};
use super::parse::normalize_field;

/// Normalized numeric inputs to the cost model
///
/// `phev_gas_percentage` selects the variant: `None` is the pure EV
/// comparison, `Some(p)` blends gas and electric cost by the usage split.
///
/// # Example
/// ```
/// use evvgas_core_rs::{InputParameters, Variant};
///
/// let params = InputParameters::for_variant(Variant::Simple);
/// assert_eq!(params.gas_price, 3.5);
/// assert_eq!(params.phev_gas_percentage, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputParameters {
    /// Annual flat EV fee ($/year)
    pub ev_road_tax: f64,
    /// $/kWh
    pub electricity_cost: f64,
    /// EV efficiency (miles/kWh)
    pub miles_per_kwh: f64,
    /// Share of PHEV miles driven on gasoline, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phev_gas_percentage: Option<f64>,
    /// $ per maintenance service
    pub maintenance_cost: f64,
    /// Miles between services
    pub maintenance_miles: f64,
    /// $/gallon
    pub gas_price: f64,
    /// Miles per gallon
    pub mpg: f64,
    /// Yearly mileage, used to spread the road tax and for annual totals
    pub annual_miles: f64,
}

impl InputParameters {
    /// Default parameters for a product variant
    pub fn for_variant(variant: Variant) -> Self {
        let default = |field: Field| field.default_value(variant).unwrap_or(0.0);
        Self {
            ev_road_tax: default(Field::EvRoadTax),
            electricity_cost: default(Field::ElectricityCost),
            miles_per_kwh: default(Field::MilesPerKwh),
            phev_gas_percentage: Field::PhevGasPercentage.default_value(variant),
            maintenance_cost: default(Field::MaintenanceCost),
            maintenance_miles: default(Field::MaintenanceMiles),
            gas_price: default(Field::GasPrice),
            mpg: default(Field::Mpg),
            annual_miles: default(Field::AnnualMiles),
        }
    }

    pub fn variant(&self) -> Variant {
        if self.phev_gas_percentage.is_some() {
            Variant::Phev
        } else {
            Variant::Simple
        }
    }

    /// Electric share of PHEV miles (100 - gas share)
    pub fn phev_electric_percentage(&self) -> Option<f64> {
        self.phev_gas_percentage.map(|gas| 100.0 - gas)
    }

    /// Store an already-normalized value
    ///
    /// Setting the PHEV percentage switches the parameters to the PHEV
    /// variant.
    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::EvRoadTax => self.ev_road_tax = value,
            Field::ElectricityCost => self.electricity_cost = value,
            Field::MilesPerKwh => self.miles_per_kwh = value,
            Field::PhevGasPercentage => self.phev_gas_percentage = Some(value),
            Field::MaintenanceCost => self.maintenance_cost = value,
            Field::MaintenanceMiles => self.maintenance_miles = value,
            Field::GasPrice => self.gas_price = value,
            Field::Mpg => self.mpg = value,
            Field::AnnualMiles => self.annual_miles = value,
        }
    }
}

impl Default for InputParameters {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

/// Field text as entered, before normalization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawInputs {
    values: BTreeMap<Field, String>,
}

impl RawInputs {
    /// Text of each default value, as the form shows it on load
    pub fn defaults(variant: Variant) -> Self {
        let values = Field::ALL
            .into_iter()
            .filter_map(|field| {
                field
                    .default_value(variant)
                    .map(|value| (field, value.to_string()))
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, raw: impl Into<String>) {
        self.values.insert(field, raw.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.values.remove(&field)
    }

    /// Normalize every field into numeric parameters
    ///
    /// A missing field reads as empty input and takes its fallback. A
    /// missing PHEV percentage means the simple variant.
    pub fn normalize(&self) -> InputParameters {
        let value = |field: Field| normalize_field(field, self.get(field).unwrap_or(""));
        InputParameters {
            ev_road_tax: value(Field::EvRoadTax),
            electricity_cost: value(Field::ElectricityCost),
            miles_per_kwh: value(Field::MilesPerKwh),
            phev_gas_percentage: self
                .get(Field::PhevGasPercentage)
                .map(|raw| normalize_field(Field::PhevGasPercentage, raw)),
            maintenance_cost: value(Field::MaintenanceCost),
            maintenance_miles: value(Field::MaintenanceMiles),
            gas_price: value(Field::GasPrice),
            mpg: value(Field::Mpg),
            annual_miles: value(Field::AnnualMiles),
        }
    }
}
