//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod meal_plans;

pub use meal_plans::{MealPlanRecord, MealPlanRepository};
