//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Load once**: The meal plan catalog is read at startup, not per request
//! 2. **Cheap cloning**: All fields use Arc or are already Clone-cheap
//! 3. **Immutable after creation**: State is read-only during request handling

use crate::config::AppConfig;
use diet_tracker_shared::meal_plans::MealPlan;
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// # Performance
///
/// - `db`: PgPool is internally Arc'd, cloning is O(1)
/// - `config`: Wrapped in Arc, cloning is O(1)
/// - `meal_plans`: Shared slice, cloning is O(1)
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Read-only meal plan catalog, in catalog order
    pub meal_plans: Arc<[MealPlan]>,
    /// Renders the Prometheus exposition, `None` when no recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, config: AppConfig, meal_plans: Vec<MealPlan>) -> Self {
        Self {
            db,
            config: Arc::new(config),
            meal_plans: meal_plans.into(),
            metrics: None,
        }
    }

    /// Attach the Prometheus handle used by `GET /metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the meal plan catalog
    #[inline]
    pub fn meal_plans(&self) -> &[MealPlan] {
        &self.meal_plans
    }
}
