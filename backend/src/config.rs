//! Parameter files
//!
//! A parameter file is a flat JSON object keyed by field wire name, with
//! an optional `"variant"` key:
//!
//! ```json
//! { "variant": "phev", "gasPrice": 3.29, "mpg": "31", "phevGasPercentage": 40 }
//! ```
//!
//! Values may be JSON numbers, strings or null. They are kept as raw text
//! and go through the same normalization as form input, so a malformed
//! value is recovered rather than rejected. Unknown keys, unreadable files
//! and invalid JSON are errors.

use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::calculator::Calculator;
use crate::inputs::{Field, Variant};

/// Errors from loading parameters or resolving names
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parameter file must be a JSON object")]
    NotAnObject,

    #[error("Unknown field: '{0}'")]
    UnknownField(String),

    #[error("Unknown variant: '{0}' (expected 'simple' or 'phev')")]
    UnknownVariant(String),

    #[error("Field '{field}' must be a number, string or null")]
    InvalidValue { field: String },
}

/// Raw values loaded from a parameter file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterFile {
    pub variant: Option<Variant>,
    pub values: Vec<(Field, String)>,
}

impl ParameterFile {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let Value::Object(map) = serde_json::from_str::<Value>(json)? else {
            return Err(ConfigError::NotAnObject);
        };

        let mut file = ParameterFile::default();
        for (key, value) in map {
            if key == "variant" {
                let name = value
                    .as_str()
                    .ok_or_else(|| ConfigError::InvalidValue { field: key.clone() })?;
                file.variant = Some(name.parse()?);
                continue;
            }

            let field = Field::parse(&key)?;
            let raw = match value {
                Value::Number(n) => n.to_string(),
                Value::String(s) => s,
                Value::Null => String::new(),
                _ => return Err(ConfigError::InvalidValue { field: key }),
            };
            file.values.push((field, raw));
        }
        Ok(file)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let file = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            fields = file.values.len(),
            variant = ?file.variant,
            "loaded parameter file"
        );
        Ok(file)
    }

    /// Apply the file's raw values as edits
    ///
    /// The variant is applied by the caller when constructing the
    /// calculator; this only replays field edits.
    pub fn apply_to(&self, calculator: &mut Calculator) {
        for (field, raw) in &self.values {
            calculator.set_field(*field, raw.clone());
        }
    }
}
