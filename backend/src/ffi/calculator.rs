//! PyO3 wrapper for Calculator
//!
//! This module provides the Python interface to the calculator session.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::calculator::Calculator as RustCalculator;
use crate::config::ConfigError;
use crate::inputs::{Field, Variant};
use crate::report::{render_text, ReportOptions};

fn to_py_err(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Python wrapper for the Rust calculator session
///
/// # Example (from Python)
///
/// ```python
/// from evvgas_core_rs import Calculator
///
/// calc = Calculator("phev")
/// calc.set_field("phevGasPercentage", "50")
/// print(calc.report(show_annual=True))
/// ```
#[pyclass(name = "Calculator")]
pub struct PyCalculator {
    inner: RustCalculator,
}

#[pymethods]
impl PyCalculator {
    /// Create a session with the defaults of `variant` ("simple" or "phev")
    ///
    /// # Errors
    ///
    /// Raises ValueError for an unknown variant name.
    #[new]
    #[pyo3(signature = (variant = "simple"))]
    fn new(variant: &str) -> PyResult<Self> {
        let variant: Variant = variant.parse().map_err(to_py_err)?;
        Ok(Self {
            inner: RustCalculator::new(variant),
        })
    }

    /// Edit a field by wire name and return the metrics as JSON
    ///
    /// Invalid numbers never raise; only an unknown field name does.
    fn set_field(&mut self, name: &str, value: &str) -> PyResult<String> {
        let field = Field::parse(name).map_err(to_py_err)?;
        let metrics = self.inner.set_field(field, value);
        to_json(&metrics)
    }

    fn set_phev_enabled(&mut self, enabled: bool) -> PyResult<String> {
        let metrics = self.inner.set_phev_enabled(enabled);
        to_json(&metrics)
    }

    /// Raw text of a field, or None when the field is not shown
    fn raw(&self, name: &str) -> PyResult<Option<String>> {
        let field = Field::parse(name).map_err(to_py_err)?;
        Ok(self.inner.raw(field).map(str::to_string))
    }

    fn variant(&self) -> String {
        self.inner.variant().to_string()
    }

    fn metrics_json(&self) -> PyResult<String> {
        to_json(&self.inner.metrics())
    }

    fn snapshot_json(&self) -> PyResult<String> {
        to_json(&self.inner.snapshot())
    }

    #[pyo3(signature = (show_annual = false))]
    fn report(&self, show_annual: bool) -> String {
        render_text(&self.inner.metrics(), ReportOptions { show_annual })
    }
}
