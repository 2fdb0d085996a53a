//! Error types for the Diet Tracker calculation core

use crate::validation::{MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEEKLY_LOSS_KG, MAX_WEIGHT_KG};
use thiserror::Error;

/// Invalid input reaching the metrics pipeline
///
/// Every variant maps to one input field so callers can point the user at
/// the offending value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Height must be above 0 and at most {max} centimeters, got {0}", max = MAX_HEIGHT_CM)]
    InvalidHeight(f64),

    #[error("Weight must be above 0 and at most {max} kilograms, got {0}", max = MAX_WEIGHT_KG)]
    InvalidWeight(f64),

    #[error("Age must be between 1 and {max} years, got {0}", max = MAX_AGE_YEARS)]
    InvalidAge(i32),

    #[error(
        "Target weight loss must be above 0 and at most {max} kilograms per week, got {0}",
        max = MAX_WEEKLY_LOSS_KG
    )]
    InvalidTargetWeightLoss(f64),

    #[error("Unknown activity level '{0}'. Must be one of: sedentary, light, moderate, active, very_active")]
    UnknownActivityLevel(String),

    #[error("Unknown weight goal '{0}'. Must be one of: lose_weight, maintain")]
    UnknownWeightGoal(String),
}

impl CalculationError {
    /// Name of the input field that caused the error
    pub fn field(&self) -> &'static str {
        match self {
            CalculationError::InvalidHeight(_) => "height",
            CalculationError::InvalidWeight(_) => "weight",
            CalculationError::InvalidAge(_) => "age",
            CalculationError::InvalidTargetWeightLoss(_) => "target_weight_loss",
            CalculationError::UnknownActivityLevel(_) => "activity_level",
            CalculationError::UnknownWeightGoal(_) => "weight_goal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_names() {
        assert_eq!(CalculationError::InvalidHeight(0.0).field(), "height");
        assert_eq!(
            CalculationError::UnknownActivityLevel("couch".to_string()).field(),
            "activity_level"
        );
    }

    #[test]
    fn test_error_message_lists_valid_keys() {
        let err = CalculationError::UnknownActivityLevel("extreme".to_string());
        let msg = err.to_string();
        assert!(msg.contains("'extreme'"));
        assert!(msg.contains("very_active"));
    }

    #[test]
    fn test_range_message_names_limit() {
        let msg = CalculationError::InvalidWeight(1.0e9).to_string();
        assert!(msg.contains("at most 1000 kilograms"), "{}", msg);
    }
}
