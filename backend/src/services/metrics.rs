//! Metrics service - runs the nutrition pipeline for API requests

use crate::error::ApiError;
use crate::services::MealPlanService;
use diet_tracker_shared::health_metrics::{calculate_all_metrics, PersonalInfo};
use diet_tracker_shared::meal_plans::MealPlan;
use diet_tracker_shared::types::{
    CalculateMetricsRequest, MetricsResponse, PlanRecommendationResponse,
};
use tracing::{debug, warn};
use validator::Validate;

/// Counter of successful pipeline runs
pub const METRIC_CALCULATIONS_TOTAL: &str = "diet_tracker_metric_calculations_total";

/// Metrics service
pub struct MetricsService;

impl MetricsService {
    /// Validate a request and derive BMI, calories and macros from it
    pub fn calculate(req: CalculateMetricsRequest) -> Result<MetricsResponse, ApiError> {
        req.validate()?;
        let info = PersonalInfo::try_from(req)?;
        let metrics = calculate_all_metrics(&info)?;

        metrics::counter!(METRIC_CALCULATIONS_TOTAL).increment(1);

        if metrics.carbs_macro < 0 {
            warn!(
                daily_calories = metrics.daily_calories,
                carbs_macro = metrics.carbs_macro,
                "Calorie budget does not cover protein and fat targets"
            );
        }

        debug!(
            activity_level = %info.activity_level,
            goal = info.weight_goal.map(|g| g.as_str()),
            daily_calories = metrics.daily_calories,
            "Calculated metrics"
        );

        Ok(MetricsResponse::from(metrics))
    }

    /// Calculate metrics and attach the meal plan covering the calorie target
    pub fn recommend(
        req: CalculateMetricsRequest,
        catalog: &[MealPlan],
    ) -> Result<PlanRecommendationResponse, ApiError> {
        let metrics = Self::calculate(req)?;
        let meal_plan =
            MealPlanService::match_for_calories(catalog, metrics.metrics.daily_calories).cloned();

        Ok(PlanRecommendationResponse { metrics, meal_plan })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diet_tracker_shared::meal_plans::default_meal_plans;

    fn request() -> CalculateMetricsRequest {
        CalculateMetricsRequest {
            weight: 60.0,
            height: 165.0,
            age: 25,
            sex: "female".to_string(),
            activity_level: "moderate".to_string(),
            weight_goal: None,
            target_weight_loss: None,
        }
    }

    #[test]
    fn test_calculate() {
        let response = MetricsService::calculate(request()).unwrap();
        assert_eq!(response.metrics.daily_calories, 1485);
        assert_eq!(response.metrics.bmi, 22.0);
        assert_eq!(response.bmi_category, "Normal/Healthy");
    }

    #[test]
    fn test_calculate_rejects_unknown_activity_level() {
        let req = CalculateMetricsRequest {
            activity_level: "olympian".to_string(),
            ..request()
        };
        match MetricsService::calculate(req) {
            Err(ApiError::Validation { field, .. }) => {
                assert_eq!(field.as_deref(), Some("activity_level"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_calculate_rejects_zero_height() {
        let req = CalculateMetricsRequest {
            height: 0.0,
            ..request()
        };
        assert!(matches!(
            MetricsService::calculate(req),
            Err(ApiError::Validation { .. })
        ));
    }

    #[test]
    fn test_recommend_matches_plan() {
        // 1485 - 550 = 935, raised to the 1200 floor
        let req = CalculateMetricsRequest {
            weight_goal: Some("lose_weight".to_string()),
            ..request()
        };
        let catalog = default_meal_plans();
        let response = MetricsService::recommend(req, &catalog).unwrap();
        assert_eq!(response.metrics.metrics.daily_calories, 1200);
        let plan = response.meal_plan.unwrap();
        assert_eq!(plan.calorie_range_min, 1200);
        assert_eq!(plan.calorie_range_max, 1400);
    }

    #[test]
    fn test_recommend_without_matching_band() {
        // 2009 kcal falls between the 1800-2000 and 2200-2500 bands
        let req = CalculateMetricsRequest {
            weight: 70.0,
            height: 175.0,
            age: 30,
            sex: "male".to_string(),
            activity_level: "sedentary".to_string(),
            ..request()
        };
        let response = MetricsService::recommend(req, &default_meal_plans()).unwrap();
        assert_eq!(response.metrics.metrics.daily_calories, 2009);
        assert!(response.meal_plan.is_none());
    }
}
