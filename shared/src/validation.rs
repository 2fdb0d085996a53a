//! Input validation functions
//!
//! The metrics pipeline only accepts physically meaningful profiles. Each
//! check returns the `CalculationError` naming the field it rejects.
//!
//! The upper limits keep every intermediate value of the pipeline well
//! inside `i32`.

use crate::errors::CalculationError;
use crate::health_metrics::PersonalInfo;

/// Heaviest accepted body weight (kg)
pub const MAX_WEIGHT_KG: f64 = 1000.0;

/// Tallest accepted height (cm)
pub const MAX_HEIGHT_CM: f64 = 300.0;

pub const MAX_AGE_YEARS: i32 = 150;

/// Largest accepted weekly loss target (kg/week)
pub const MAX_WEEKLY_LOSS_KG: f64 = 10.0;

fn within(value: f64, max: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= max
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), CalculationError> {
    if !within(weight_kg, MAX_WEIGHT_KG) {
        return Err(CalculationError::InvalidWeight(weight_kg));
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), CalculationError> {
    if !within(height_cm, MAX_HEIGHT_CM) {
        return Err(CalculationError::InvalidHeight(height_cm));
    }
    Ok(())
}

/// Validate age (in whole years)
pub fn validate_age_years(age_years: i32) -> Result<(), CalculationError> {
    if !(1..=MAX_AGE_YEARS).contains(&age_years) {
        return Err(CalculationError::InvalidAge(age_years));
    }
    Ok(())
}

/// Validate the optional weekly loss target (kg/week)
pub fn validate_target_weight_loss(target: Option<f64>) -> Result<(), CalculationError> {
    match target {
        Some(kg) if !within(kg, MAX_WEEKLY_LOSS_KG) => {
            Err(CalculationError::InvalidTargetWeightLoss(kg))
        }
        _ => Ok(()),
    }
}

/// Validate a complete profile before it enters the pipeline
pub fn validate_personal_info(info: &PersonalInfo) -> Result<(), CalculationError> {
    validate_weight_kg(info.weight_kg)?;
    validate_height_cm(info.height_cm)?;
    validate_age_years(info.age_years)?;
    validate_target_weight_loss(info.target_weight_loss_kg)?;
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" => "Current Weight",
        "height" => "Height",
        "age" => "Age",
        "sex" => "Sex",
        "activity_level" => "Activity Level",
        "weight_goal" => "Weight Goal",
        "target_weight_loss" => "Target Weekly Weight Loss",
        "calories" => "Daily Calories",
        _ => field_name,
    }
}
