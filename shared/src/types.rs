//! API request and response types

use crate::errors::CalculationError;
use crate::health_metrics::{classify_bmi, DerivedMetrics, PersonalInfo, WeightGoal};
use crate::meal_plans::MealPlan;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// Metrics Types
// ============================================================================

/// Metrics calculation request
///
/// Enumerated fields arrive as raw strings so an unknown key is reported as a
/// validation error on that field rather than a generic body rejection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalculateMetricsRequest {
    /// Weight in kg
    #[validate(range(exclusive_min = 0.0, max = 1000.0))]
    pub weight: f64,
    /// Height in cm
    #[validate(range(exclusive_min = 0.0, max = 300.0))]
    pub height: f64,
    #[validate(range(min = 1, max = 150))]
    pub age: i32,
    pub sex: String,
    pub activity_level: String,
    #[serde(default)]
    pub weight_goal: Option<String>,
    /// Desired loss in kg/week
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, max = 10.0))]
    pub target_weight_loss: Option<f64>,
}

impl TryFrom<CalculateMetricsRequest> for PersonalInfo {
    type Error = CalculationError;

    fn try_from(req: CalculateMetricsRequest) -> Result<Self, Self::Error> {
        let activity_level = req.activity_level.parse()?;
        let weight_goal = match req.weight_goal.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(goal) => Some(goal.parse::<WeightGoal>()?),
        };

        Ok(PersonalInfo {
            weight_kg: req.weight,
            height_cm: req.height,
            age_years: req.age,
            sex: req.sex,
            activity_level,
            weight_goal,
            target_weight_loss_kg: req.target_weight_loss,
        })
    }
}

/// Derived metrics plus the BMI classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
    pub bmi_category: String,
}

impl From<DerivedMetrics> for MetricsResponse {
    fn from(metrics: DerivedMetrics) -> Self {
        Self {
            bmi_category: classify_bmi(metrics.bmi).description().to_string(),
            metrics,
        }
    }
}

/// Metrics with the meal plan covering the resulting calorie target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRecommendationResponse {
    pub metrics: MetricsResponse,
    /// `None` when no catalog band contains the daily calories
    pub meal_plan: Option<MealPlan>,
}

// ============================================================================
// Meal Plan Types
// ============================================================================

/// Meal plan match query
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MealPlanMatchQuery {
    #[validate(range(min = 0))]
    pub calories: i32,
}

/// Meal plan catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanListResponse {
    pub data: Vec<MealPlan>,
    pub total: usize,
}
