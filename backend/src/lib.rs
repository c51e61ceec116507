//! EV vs Gas Cost Core - Rust Engine
//!
//! Per-mile operating cost comparison of an electric vehicle, a plug-in
//! hybrid and a gasoline vehicle.
//!
//! # Architecture
//!
//! - **inputs**: Field metadata, lenient parsing, fallback normalization
//! - **costs**: The cost model and its self-documenting schema
//! - **calculator**: Editable session state (one per form/session)
//! - **report**: Display formatting of the results panel
//! - **config**: JSON parameter files and configuration errors
//!
//! # Critical Invariants
//!
//! 1. Metrics are a pure function of the current parameters (no caching)
//! 2. Invalid numeric input is recovered, never surfaced as an error
//! 3. Divisor fields never reach the model as 0 or subnormal, and overflow
//!    saturates, so no metric is NaN or infinite

// Module declarations
pub mod calculator;
pub mod config;
pub mod costs;
pub mod inputs;
pub mod report;

// Re-exports for convenience
pub use calculator::{Calculator, Snapshot};
pub use config::{ConfigError, ParameterFile};
pub use costs::{
    compute_metrics, get_cost_schema, AnnualTotals, Comparison, DerivedMetrics, UsageSplit, Winner,
};
pub use inputs::{Field, FieldGroup, FieldRole, InputParameters, RawInputs, Variant};
pub use report::{render_text, ReportOptions};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

/// Get the cost schema documentation as a JSON string.
///
/// Documents every input field (default, fallback, constraints) and every
/// derived metric (formula, unit, example).
#[cfg(feature = "pyo3")]
#[pyfunction]
#[pyo3(name = "get_cost_schema")]
fn py_get_cost_schema() -> PyResult<String> {
    Ok(costs::schema_docs::get_cost_schema())
}

#[cfg(feature = "pyo3")]
#[pymodule]
fn evvgas_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::calculator::PyCalculator>()?;
    m.add_function(wrap_pyfunction!(py_get_cost_schema, m)?)?;
    Ok(())
}
