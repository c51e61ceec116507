//! Python bindings (feature `pyo3`)
//!
//! Exposes the calculator session to a Python front end. All values cross
//! the boundary as text or JSON strings.

pub mod calculator;
