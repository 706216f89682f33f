use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::services::rounding;

/// A lift's one-rep max paired with the conservative training max derived
/// from it.
///
/// The training max is always `round(one_rep_max × 0.9)` to a whole unit,
/// computed once at cycle-creation time and frozen into the cycle. Updating
/// a 1RM later never alters an existing cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingMax {
    pub exercise_id: String,
    pub exercise_name: String,
    pub one_rep_max: Decimal,
    pub training_max: Decimal,
}

impl TrainingMax {
    /// Derives the training max from a true one-rep max. This is the only
    /// way to build a `TrainingMax`, which keeps the
    /// `training_max <= one_rep_max` invariant by construction.
    pub fn from_one_rep_max(
        exercise_id: impl Into<String>,
        exercise_name: impl Into<String>,
        one_rep_max: Decimal,
    ) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            exercise_name: exercise_name.into(),
            one_rep_max,
            training_max: rounding::training_max(one_rep_max),
        }
    }
}
