//! Health metrics calculations module
//!
//! Provides the calorie and macronutrient pipeline used to derive a user's
//! daily targets from their biometric profile:
//!
//! BMI → TDEE → goal adjustment → macro split
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Single Variant**: One BMR equation, one activity table, one macro policy
//! 3. **Explicit Failures**: Bad input is a `CalculationError`, never NaN
//! 4. **Type Safety**: Closed enums for activity levels and goals

use crate::errors::CalculationError;
use crate::validation::validate_personal_info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Energy stored in one kilogram of body fat (kcal)
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Weekly loss applied when a weight-loss goal has no explicit target (kg)
pub const DEFAULT_WEEKLY_LOSS_KG: f64 = 0.5;

/// Daily intake never goes below this, whatever the requested deficit (kcal)
pub const MIN_DAILY_CALORIES: i32 = 1200;

/// Protein target per kilogram of body weight (g)
pub const PROTEIN_G_PER_KG: f64 = 1.6;

/// Share of total calories allotted to fat
pub const FAT_CALORIE_SHARE: f64 = 0.25;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Round half toward positive infinity (`2.5 → 3`, `-2.5 → -2`).
///
/// Every integer rounding in the pipeline goes through here so negative
/// residuals (carbs) round the same way positive values do.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex for the BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    /// Interpret a free-form sex label.
    ///
    /// Only `"male"` (any case) selects the male constant; every other label
    /// uses the female one.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("male") {
            BiologicalSex::Male
        } else {
            BiologicalSex::Female
        }
    }
}

/// Activity level for TDEE calculation
///
/// Deserialization goes through [`FromStr`], so JSON keys and raw keys
/// accept the same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise, physical job
    VeryActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Wire key for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ActivityLevel {
    type Error = CalculationError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

impl FromStr for ActivityLevel {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ActivityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| CalculationError::UnknownActivityLevel(s.to_string()))
    }
}

/// Calorie goal selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum WeightGoal {
    LoseWeight,
    Maintain,
}

impl WeightGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightGoal::LoseWeight => "lose_weight",
            WeightGoal::Maintain => "maintain",
        }
    }
}

impl TryFrom<String> for WeightGoal {
    type Error = CalculationError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

impl FromStr for WeightGoal {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose_weight" => Ok(WeightGoal::LoseWeight),
            "maintain" => Ok(WeightGoal::Maintain),
            _ => Err(CalculationError::UnknownWeightGoal(s.to_string())),
        }
    }
}

/// Biometric profile consumed by the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Current weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Age in years
    #[serde(rename = "age")]
    pub age_years: i32,
    /// Free-form sex label, see [`BiologicalSex::from_label`]
    pub sex: String,
    pub activity_level: ActivityLevel,
    /// `None` means maintenance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_goal: Option<WeightGoal>,
    /// Desired loss in kg/week, only read for [`WeightGoal::LoseWeight`]
    #[serde(
        default,
        rename = "target_weight_loss",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_weight_loss_kg: Option<f64>,
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: i32,
    /// Residual of the calorie budget; negative for extreme low-calorie/high-weight inputs
    pub carbs_g: i32,
    pub fat_g: i32,
}

/// Everything the pipeline derives from a [`PersonalInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub bmi: f64,
    pub daily_calories: i32,
    pub protein_macro: i32,
    pub carbs_macro: i32,
    pub fat_macro: i32,
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }
}

/// Calculate BMI from weight and height, rounded to one decimal
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, CalculationError> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(CalculationError::InvalidHeight(height_cm));
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok(round_half_up(bmi * 10.0) / 10.0)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 16.0 {
        BmiCategory::SeverelyUnderweight
    } else if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseClass1
    } else if bmi < 40.0 {
        BmiCategory::ObeseClass2
    } else {
        BmiCategory::ObeseClass3
    }
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure, rounded to whole kcal
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    activity_level: ActivityLevel,
) -> i32 {
    let bmr = calculate_bmr(weight_kg, height_cm, age_years, BiologicalSex::from_label(sex));
    round_half_up(bmr * activity_level.multiplier()) as i32
}

/// [`calculate_tdee`] for callers holding the activity level as a raw key
pub fn calculate_tdee_for_key(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    activity_key: &str,
) -> Result<i32, CalculationError> {
    let activity_level: ActivityLevel = activity_key.parse()?;
    Ok(calculate_tdee(weight_kg, height_cm, age_years, sex, activity_level))
}

// ============================================================================
// Goal Adjustment
// ============================================================================

/// Apply the user's goal to their TDEE
///
/// Maintenance returns the TDEE unchanged. Weight loss subtracts the daily
/// share of `weekly_loss × 7700 kcal`, never going below
/// [`MIN_DAILY_CALORIES`].
pub fn adjust_calories_for_goal(
    tdee: i32,
    goal: Option<WeightGoal>,
    target_weight_loss_kg: Option<f64>,
) -> i32 {
    match goal {
        Some(WeightGoal::LoseWeight) => {
            let weekly_loss = target_weight_loss_kg
                .filter(|kg| *kg > 0.0)
                .unwrap_or(DEFAULT_WEEKLY_LOSS_KG);
            let daily_deficit = round_half_up(weekly_loss * KCAL_PER_KG_FAT / 7.0) as i32;
            tdee.saturating_sub(daily_deficit).max(MIN_DAILY_CALORIES)
        }
        Some(WeightGoal::Maintain) | None => tdee,
    }
}

// ============================================================================
// Macronutrients
// ============================================================================

/// Split a daily calorie budget into macronutrient grams
///
/// Protein is fixed per kg of body weight, fat takes a fixed share of the
/// budget, carbs get whatever is left.
///
/// Arithmetic is done in `f64`, so out-of-range weights cannot overflow.
/// The final `as i32` casts saturate; validated profiles stay far below that.
pub fn calculate_macros(daily_calories: i32, weight_kg: f64) -> MacroTargets {
    // Whole grams, kept as f64 until the final casts
    let protein_g = round_half_up(weight_kg * PROTEIN_G_PER_KG);
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;

    let fat_kcal = daily_calories as f64 * FAT_CALORIE_SHARE;
    let fat_g = round_half_up(fat_kcal / KCAL_PER_G_FAT) as i32;

    // Uses the unrounded fat calories, not fat_g × 9
    let carb_kcal = daily_calories as f64 - protein_kcal - fat_kcal;
    let carbs_g = round_half_up(carb_kcal / KCAL_PER_G_CARBS) as i32;

    MacroTargets {
        protein_g: protein_g as i32,
        carbs_g,
        fat_g,
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Run the full pipeline for one profile
///
/// The record is validated first; the four steps then run in fixed order.
pub fn calculate_all_metrics(info: &PersonalInfo) -> Result<DerivedMetrics, CalculationError> {
    validate_personal_info(info)?;

    let bmi = calculate_bmi(info.weight_kg, info.height_cm)?;
    let tdee = calculate_tdee(
        info.weight_kg,
        info.height_cm,
        info.age_years,
        &info.sex,
        info.activity_level,
    );
    let daily_calories =
        adjust_calories_for_goal(tdee, info.weight_goal, info.target_weight_loss_kg);
    let macros = calculate_macros(daily_calories, info.weight_kg);

    Ok(DerivedMetrics {
        bmi,
        daily_calories,
        protein_macro: macros.protein_g,
        carbs_macro: macros.carbs_g,
        fat_macro: macros.fat_g,
    })
}
