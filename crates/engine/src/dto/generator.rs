use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::models::TrainingMax;

/// Generator input for one lift: the boundary shape storage and the UI hand
/// over. Validated before the core derives training maxes from it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LiftMaxInput {
    #[validate(length(min = 1, max = 100, message = "Exercise id is required"))]
    pub exercise_id: String,

    #[validate(length(min = 1, max = 255, message = "Exercise name is required"))]
    pub exercise_name: String,

    #[validate(custom(function = "validate_positive_max"))]
    pub one_rep_max: Decimal,
}

// Validation helper
fn validate_positive_max(value: &Decimal) -> std::result::Result<(), validator::ValidationError> {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        Err(validator::ValidationError::new("non_positive_one_rep_max"))
    }
}

impl LiftMaxInput {
    /// Validates the whole input list and freezes it into training maxes.
    pub fn into_training_maxes(inputs: Vec<LiftMaxInput>) -> Result<Vec<TrainingMax>> {
        for input in &inputs {
            input.validate()?;
        }

        Ok(inputs
            .into_iter()
            .map(|i| TrainingMax::from_one_rep_max(i.exercise_id, i.exercise_name, i.one_rep_max))
            .collect())
    }
}
