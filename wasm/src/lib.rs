//! Diet Tracker WASM Module
//!
//! This crate provides WebAssembly bindings so the browser client can run
//! the nutrition calculations locally, with the same results as the server.
//!
//! Every export is a thin wrapper over a plain Rust helper returning
//! `Result<_, String>`; the helpers are what the native tests exercise.

use diet_tracker_shared::health_metrics::{self, PersonalInfo, WeightGoal};
use diet_tracker_shared::meal_plans::{self, MealPlan};
use diet_tracker_shared::types::CalculateMetricsRequest;
use diet_tracker_shared::validation;
use wasm_bindgen::prelude::*;

fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, String> {
    health_metrics::calculate_bmi(weight_kg, height_cm).map_err(|e| e.to_string())
}

fn tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    activity_level: &str,
) -> Result<i32, String> {
    validation::validate_weight_kg(weight_kg)
        .and_then(|_| validation::validate_height_cm(height_cm))
        .and_then(|_| validation::validate_age_years(age_years))
        .and_then(|_| {
            health_metrics::calculate_tdee_for_key(
                weight_kg,
                height_cm,
                age_years,
                sex,
                activity_level,
            )
        })
        .map_err(|e| e.to_string())
}

fn goal_calories(
    tdee: i32,
    goal: Option<String>,
    target_weight_loss_kg: Option<f64>,
) -> Result<i32, String> {
    let goal = match goal.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(key) => Some(key.parse::<WeightGoal>().map_err(|e| e.to_string())?),
    };
    Ok(health_metrics::adjust_calories_for_goal(tdee, goal, target_weight_loss_kg))
}

fn all_metrics_json(personal_info_json: &str) -> Result<String, String> {
    let request: CalculateMetricsRequest =
        serde_json::from_str(personal_info_json).map_err(|e| e.to_string())?;
    let info = PersonalInfo::try_from(request).map_err(|e| e.to_string())?;
    let metrics = health_metrics::calculate_all_metrics(&info).map_err(|e| e.to_string())?;
    serde_json::to_string(&metrics).map_err(|e| e.to_string())
}

fn meal_plan_json(calories: i32, catalog_json: &str) -> Result<Option<String>, String> {
    let catalog: Vec<MealPlan> = serde_json::from_str(catalog_json).map_err(|e| e.to_string())?;
    meal_plans::find_meal_plan(calories, &catalog)
        .map(|plan| serde_json::to_string(plan).map_err(|e| e.to_string()))
        .transpose()
}

fn default_catalog_json() -> Result<String, String> {
    serde_json::to_string(&meal_plans::default_meal_plans()).map_err(|e| e.to_string())
}

/// Calculate BMI from weight (kg) and height (cm), one decimal
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, JsError> {
    bmi(weight_kg, height_cm).map_err(|e| JsError::new(&e))
}

/// Calculate TDEE (Total Daily Energy Expenditure)
/// Uses Mifflin-St Jeor equation
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    activity_level: &str,
) -> Result<i32, JsError> {
    tdee(weight_kg, height_cm, age_years, sex, activity_level).map_err(|e| JsError::new(&e))
}

/// Apply a weight goal (`"lose_weight"`, `"maintain"` or none) to a TDEE
#[wasm_bindgen]
pub fn adjust_calories_for_goal(
    tdee: i32,
    goal: Option<String>,
    target_weight_loss_kg: Option<f64>,
) -> Result<i32, JsError> {
    goal_calories(tdee, goal, target_weight_loss_kg).map_err(|e| JsError::new(&e))
}

/// Run the whole pipeline on a personal-info JSON document
#[wasm_bindgen]
pub fn calculate_all_metrics(personal_info_json: &str) -> Result<String, JsError> {
    all_metrics_json(personal_info_json).map_err(|e| JsError::new(&e))
}

/// Find the meal plan for a calorie target in a JSON catalog
#[wasm_bindgen]
pub fn find_meal_plan(calories: i32, catalog_json: &str) -> Result<Option<String>, JsError> {
    meal_plan_json(calories, catalog_json).map_err(|e| JsError::new(&e))
}

/// The built-in meal plan catalog as JSON
#[wasm_bindgen]
pub fn default_meal_plans() -> Result<String, JsError> {
    default_catalog_json().map_err(|e| JsError::new(&e))
}
