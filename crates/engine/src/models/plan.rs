use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::workout::Workout;

/// A 5/3/1 plan: workouts carry `week`/`day` and the cycle start date
/// anchors the schedule heuristics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiveThreeOnePlan {
    pub plan_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub workouts: Vec<Workout>,
}

/// A workout inside a free-form plan. Deliberately has no week/day fields:
/// custom plans are an ordered list with no calendar semantics, and the
/// suggestion engine relies on that absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomWorkout {
    pub workout_id: String,
    pub exercise_id: String,
    pub exercise_name: String,
}

/// A user-authored plan with no periodization structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPlan {
    pub plan_id: Uuid,
    pub name: String,
    pub workouts: Vec<CustomWorkout>,
}

/// The unified plan shape the suggestion engine and logger operate over.
///
/// A tagged union rather than optional week/day fields, so the two
/// scheduling models cannot be confused at a call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutPlan {
    #[serde(rename = "531")]
    FiveThreeOne(FiveThreeOnePlan),
    Custom(CustomPlan),
}

impl WorkoutPlan {
    pub fn plan_id(&self) -> Uuid {
        match self {
            WorkoutPlan::FiveThreeOne(p) => p.plan_id,
            WorkoutPlan::Custom(p) => p.plan_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            WorkoutPlan::FiveThreeOne(p) => &p.name,
            WorkoutPlan::Custom(p) => &p.name,
        }
    }

    pub fn workout_count(&self) -> usize {
        match self {
            WorkoutPlan::FiveThreeOne(p) => p.workouts.len(),
            WorkoutPlan::Custom(p) => p.workouts.len(),
        }
    }
}
