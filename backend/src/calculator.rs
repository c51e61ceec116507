//! Calculator session
//!
//! Owns the editable parameter state for one session, the way a form
//! owns its field values. Each edit stores the raw text, normalizes it
//! into the numeric parameters in place, and the metrics are recomputed
//! from scratch on every read.
//!
//! # Example
//! ```
//! use evvgas_core_rs::{Calculator, Field, Variant};
//!
//! let mut calc = Calculator::new(Variant::Simple);
//! let metrics = calc.set_field(Field::Mpg, "0"); // falls back to 1
//! assert!(metrics.gas_fuel_cost_per_mile.is_finite());
//! assert_eq!(calc.params().mpg, 1.0);
//! assert_eq!(calc.raw(Field::Mpg), Some("0"));
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::costs::{compute_metrics, DerivedMetrics};
use crate::inputs::{normalize_field, Field, InputParameters, RawInputs, Variant};

/// Inputs and metrics captured together, for JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub variant: Variant,
    pub inputs: InputParameters,
    pub metrics: DerivedMetrics,
}

/// Editable parameter state for one session
#[derive(Debug, Clone)]
pub struct Calculator {
    raw: RawInputs,
    params: InputParameters,
}

impl Calculator {
    /// Start a session with the variant's defaults
    pub fn new(variant: Variant) -> Self {
        let raw = RawInputs::defaults(variant);
        let params = raw.normalize();
        Self { raw, params }
    }

    /// Replace the text of a field and return the recomputed metrics
    ///
    /// Editing the PHEV percentage switches the session to the PHEV
    /// variant.
    pub fn set_field(&mut self, field: Field, raw: impl Into<String>) -> DerivedMetrics {
        let raw = raw.into();
        let value = normalize_field(field, &raw);
        trace!(field = field.wire_name(), raw = %raw, value, "field edited");

        self.raw.insert(field, raw);
        self.params.set(field, value);
        self.metrics()
    }

    /// Turn the PHEV usage split on or off
    ///
    /// Enabling starts at 0% gas (all-electric) unless a split is already
    /// active.
    pub fn set_phev_enabled(&mut self, enabled: bool) -> DerivedMetrics {
        match (enabled, self.params.phev_gas_percentage.is_some()) {
            (true, false) => {
                self.raw.insert(Field::PhevGasPercentage, "0");
                self.params.phev_gas_percentage = Some(0.0);
            }
            (false, true) => {
                self.raw.remove(Field::PhevGasPercentage);
                self.params.phev_gas_percentage = None;
            }
            _ => {}
        }
        self.metrics()
    }

    /// Discard all edits and return to the variant's defaults
    pub fn reset(&mut self, variant: Variant) {
        *self = Self::new(variant);
    }

    pub fn variant(&self) -> Variant {
        self.params.variant()
    }

    pub fn params(&self) -> &InputParameters {
        &self.params
    }

    /// Text of a field as last entered
    pub fn raw(&self, field: Field) -> Option<&str> {
        self.raw.get(field)
    }

    pub fn metrics(&self) -> DerivedMetrics {
        compute_metrics(&self.params)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            variant: self.variant(),
            inputs: self.params,
            metrics: self.metrics(),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}
