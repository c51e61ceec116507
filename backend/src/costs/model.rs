//! Cost Model
//!
//! Derives per-mile and annual operating cost for gas, EV and PHEV
//! ownership from normalized [`InputParameters`].
//!
//! ```text
//! gas_maintenance_per_mile = maintenance_cost / maintenance_miles
//! gas_fuel_cost_per_mile   = gas_price / mpg
//! gas_total_cost_per_mile  = gas_fuel + gas_maintenance
//!
//! ev_fuel_cost_per_mile    = electricity_cost / miles_per_kwh
//! ev_road_tax_per_mile     = ev_road_tax / annual_miles
//!
//! pure EV: ev_total = ev_fuel + ev_road_tax
//! PHEV:    phev_blended = gas_total * gas_fraction + ev_fuel * electric_fraction
//!          ev_total     = phev_blended + ev_road_tax
//! ```
//!
//! The PHEV blend weights the full gas cost (fuel and maintenance) but
//! only the EV fuel cost, and the road tax is always charged in full.
//!
//! Every call recomputes everything from the parameters. There is no
//! cached state.
//!
//! Results are always finite. A quotient that overflows is taken as if
//! its divisor were invalid (divided by 1), sums and products saturate at
//! `f64::MAX`, and a blend term with a zero usage fraction contributes
//! nothing.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::inputs::InputParameters;

/// Which vehicle is cheaper per mile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    /// EV (or PHEV, when blending) costs less per mile
    EvCheaper,
    /// Gas vehicle costs less per mile
    GasCheaper,
    /// Exactly equal per-mile cost
    Equal,
}

/// Result of comparing EV/PHEV and gas per-mile totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub winner: Winner,
    /// Absolute difference between the two totals ($/mile)
    pub cost_difference_per_mile: f64,
}

impl Comparison {
    /// Compare two per-mile totals
    ///
    /// Ties use exact floating point equality. A NaN total ranks as the
    /// more expensive side, so it never reads as a tie with a real cost.
    ///
    /// # Example
    /// ```
    /// use evvgas_core_rs::costs::{Comparison, Winner};
    ///
    /// let cmp = Comparison::between(0.05, 0.15);
    /// assert_eq!(cmp.winner, Winner::EvCheaper);
    /// assert!((cmp.cost_difference_per_mile - 0.10).abs() < 1e-12);
    /// ```
    pub fn between(ev_total_per_mile: f64, gas_total_per_mile: f64) -> Self {
        let ev = rank(ev_total_per_mile);
        let gas = rank(gas_total_per_mile);
        if ev < gas {
            Self {
                winner: Winner::EvCheaper,
                cost_difference_per_mile: bounded(gas - ev),
            }
        } else if ev > gas {
            Self {
                winner: Winner::GasCheaper,
                cost_difference_per_mile: bounded(ev - gas),
            }
        } else {
            Self {
                winner: Winner::Equal,
                cost_difference_per_mile: 0.0,
            }
        }
    }
}

fn rank(total: f64) -> f64 {
    if total.is_nan() {
        f64::INFINITY
    } else {
        total
    }
}

/// Saturate an overflowed result at the largest finite value
fn bounded(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else if value.is_nan() {
        f64::MAX
    } else {
        f64::MAX.copysign(value)
    }
}

/// `amount / divisor`, or `amount` itself when the quotient overflows
fn per_mile(amount: f64, divisor: f64) -> f64 {
    let quotient = amount / divisor;
    if quotient.is_finite() {
        quotient
    } else {
        amount
    }
}

/// Blend term; a zero share contributes nothing whatever the cost
fn weighted(cost: f64, fraction: f64) -> f64 {
    if fraction == 0.0 {
        0.0
    } else {
        bounded(cost * fraction)
    }
}

/// PHEV gas/electric usage split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSplit {
    pub gas_percentage: f64,
    pub electric_percentage: f64,
    pub gas_fraction: f64,
    pub electric_fraction: f64,
}

impl UsageSplit {
    /// Build the split from the gas and electric shares (0-100 each)
    ///
    /// Fractions divide by the sum of both shares; a zero sum gives
    /// fraction 0 for both.
    pub fn new(gas_percentage: f64, electric_percentage: f64) -> Self {
        let total = gas_percentage + electric_percentage;
        Self {
            gas_percentage,
            electric_percentage,
            gas_fraction: fraction(gas_percentage, total),
            electric_fraction: fraction(electric_percentage, total),
        }
    }

    /// The split of a PHEV parameter set, `None` for the pure EV variant
    pub fn of(params: &InputParameters) -> Option<Self> {
        params
            .phev_gas_percentage
            .zip(params.phev_electric_percentage())
            .map(|(gas, electric)| Self::new(gas, electric))
    }
}

fn fraction(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total
    }
}

/// Yearly totals (per-mile total × annual miles)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualTotals {
    pub ev_total_cost: f64,
    pub gas_total_cost: f64,
}

/// Everything derived from one set of input parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub gas_fuel_cost_per_mile: f64,
    pub gas_maintenance_per_mile: f64,
    pub gas_total_cost_per_mile: f64,

    pub ev_fuel_cost_per_mile: f64,
    pub ev_road_tax_per_mile: f64,
    /// Only present when the PHEV usage split is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phev_blended_cost_per_mile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_split: Option<UsageSplit>,
    /// EV total, or PHEV total when blending
    pub ev_total_cost_per_mile: f64,

    pub annual: AnnualTotals,
    pub comparison: Comparison,
}

impl DerivedMetrics {
    pub fn is_phev(&self) -> bool {
        self.usage_split.is_some()
    }
}

/// Compute all derived metrics
///
/// Expects normalized parameters (see [`crate::inputs::RawInputs::normalize`]),
/// but stays total for any finite input: every metric is finite.
///
/// # Example
/// ```
/// use evvgas_core_rs::{compute_metrics, InputParameters, Winner};
///
/// let metrics = compute_metrics(&InputParameters::default());
/// assert!((metrics.gas_total_cost_per_mile - 0.15).abs() < 1e-12);
/// assert_eq!(metrics.comparison.winner, Winner::EvCheaper);
/// ```
pub fn compute_metrics(params: &InputParameters) -> DerivedMetrics {
    let gas_maintenance_per_mile = per_mile(params.maintenance_cost, params.maintenance_miles);
    let gas_fuel_cost_per_mile = per_mile(params.gas_price, params.mpg);
    let gas_total_cost_per_mile = bounded(gas_fuel_cost_per_mile + gas_maintenance_per_mile);

    let ev_fuel_cost_per_mile = per_mile(params.electricity_cost, params.miles_per_kwh);
    let ev_road_tax_per_mile = per_mile(params.ev_road_tax, params.annual_miles);

    let usage_split = UsageSplit::of(params);
    let phev_blended_cost_per_mile = usage_split.map(|split| {
        bounded(
            weighted(gas_total_cost_per_mile, split.gas_fraction)
                + weighted(ev_fuel_cost_per_mile, split.electric_fraction),
        )
    });

    let ev_total_cost_per_mile =
        bounded(phev_blended_cost_per_mile.unwrap_or(ev_fuel_cost_per_mile) + ev_road_tax_per_mile);

    let metrics = DerivedMetrics {
        gas_fuel_cost_per_mile,
        gas_maintenance_per_mile,
        gas_total_cost_per_mile,
        ev_fuel_cost_per_mile,
        ev_road_tax_per_mile,
        phev_blended_cost_per_mile,
        usage_split,
        ev_total_cost_per_mile,
        annual: AnnualTotals {
            ev_total_cost: bounded(ev_total_cost_per_mile * params.annual_miles),
            gas_total_cost: bounded(gas_total_cost_per_mile * params.annual_miles),
        },
        comparison: Comparison::between(ev_total_cost_per_mile, gas_total_cost_per_mile),
    };

    trace!(
        ev_total = metrics.ev_total_cost_per_mile,
        gas_total = metrics.gas_total_cost_per_mile,
        winner = ?metrics.comparison.winner,
        "metrics recomputed"
    );

    metrics
}
