//! Cost Model and Schema Documentation
//!
//! This module provides:
//! - The per-mile cost model (`model`)
//! - Self-documenting schema for inputs and metrics (`schema_docs`)
//!
//! # Single Source of Truth
//!
//! Input metadata lives on `inputs::Field`; metric documentation lives in
//! `schema_docs.rs` and is exported for `evvgas schema`.

pub mod model;
pub mod schema_docs;

// Re-exports
pub use model::{compute_metrics, AnnualTotals, Comparison, DerivedMetrics, UsageSplit, Winner};
pub use schema_docs::{
    get_cost_schema, CostCategory, CostElement, CostExample, CostSchemaDoc, CostSchemaDocumented,
};
