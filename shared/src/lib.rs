//! Diet Tracker Shared Library
//!
//! This crate contains the nutrition calculation core, the meal plan
//! catalog, and the API types shared by the backend and WASM modules.

pub mod errors;
pub mod health_metrics;
pub mod meal_plans;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use meal_plans::*;
