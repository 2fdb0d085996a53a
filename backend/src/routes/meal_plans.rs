//! Meal plan catalog routes

use crate::error::{ApiError, ApiResult};
use crate::services::MealPlanService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use diet_tracker_shared::meal_plans::MealPlan;
use diet_tracker_shared::types::{MealPlanListResponse, MealPlanMatchQuery};
use validator::Validate;

/// Create meal plan routes
pub fn meal_plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_meal_plans))
        .route("/match", get(match_meal_plan))
}

/// GET /api/v1/meal-plans - The loaded catalog
async fn list_meal_plans(State(state): State<AppState>) -> Json<MealPlanListResponse> {
    let data = state.meal_plans().to_vec();
    Json(MealPlanListResponse {
        total: data.len(),
        data,
    })
}

/// GET /api/v1/meal-plans/match?calories=N - Plan whose band contains N
async fn match_meal_plan(
    State(state): State<AppState>,
    Query(query): Query<MealPlanMatchQuery>,
) -> ApiResult<Json<MealPlan>> {
    query.validate()?;

    MealPlanService::match_for_calories(state.meal_plans(), query.calories)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            ApiError::NotFound(format!("No meal plan covers {} kcal", query.calories))
        })
}
