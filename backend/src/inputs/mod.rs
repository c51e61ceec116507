//! Input Fields and Normalization
//!
//! This module provides:
//! - Field identities and form metadata (`field`)
//! - Lenient numeric parsing with per-field fallbacks (`parse`)
//! - Raw and normalized parameter sets (`params`)
//!
//! Normalization never fails. Invalid numeric input is recovered locally
//! with the field's fallback so no derived metric is NaN or infinite.

pub mod field;
pub mod params;
pub mod parse;

// Re-exports
pub use field::{Field, FieldGroup, FieldRole, InputConstraints, Variant};
pub use params::{InputParameters, RawInputs};
pub use parse::{normalize_field, normalize_value, parse_number};
