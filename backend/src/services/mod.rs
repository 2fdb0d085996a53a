//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the shared calculation core.

pub mod meal_plans;
pub mod metrics;

pub use meal_plans::{MealPlanService, MealPlanStore, SeedOutcome};
pub use metrics::MetricsService;
