//! Nutrition API routes

use crate::error::ApiResult;
use crate::services::MetricsService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use diet_tracker_shared::types::{
    CalculateMetricsRequest, MetricsResponse, PlanRecommendationResponse,
};

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", post(calculate_metrics))
        .route("/plan", post(recommend_plan))
}

/// POST /api/v1/nutrition/metrics - BMI, daily calories and macros
async fn calculate_metrics(
    Json(req): Json<CalculateMetricsRequest>,
) -> ApiResult<Json<MetricsResponse>> {
    Ok(Json(MetricsService::calculate(req)?))
}

/// POST /api/v1/nutrition/plan - Metrics plus the matching meal plan
async fn recommend_plan(
    State(state): State<AppState>,
    Json(req): Json<CalculateMetricsRequest>,
) -> ApiResult<Json<PlanRecommendationResponse>> {
    Ok(Json(MetricsService::recommend(req, state.meal_plans())?))
}
