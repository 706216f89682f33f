use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::workout::Workout;

/// Planned-vs-actual outcome for a single set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetResult {
    pub planned_reps: u32,
    pub actual_reps: u32,
    pub weight: Decimal,
    pub percentage: u32,
    pub is_amrap: bool,
    /// Rate of perceived exertion, 1–10.
    pub rpe: Option<u8>,
    pub note: Option<String>,
}

/// Free-form log entry for accessory work done alongside the main lift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistanceResult {
    pub exercise_name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<Decimal>,
}

/// A logged performance against one planned workout.
///
/// The id embeds the workout id and a millisecond timestamp so repeat
/// attempts at the same week/day never collide. Immutable after creation
/// except via explicit update or delete through the result store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResult {
    pub result_id: String,
    /// Id of the plan this was logged against (a cycle id for 5/3/1 plans).
    pub plan_id: Uuid,
    pub workout_id: String,
    /// Present only for results logged against a 5/3/1 cycle.
    pub week: Option<u8>,
    /// Present only for results logged against a 5/3/1 cycle.
    pub day: Option<u8>,
    pub exercise_id: String,
    pub warmup_sets: Vec<SetResult>,
    pub main_sets: Vec<SetResult>,
    pub assistance: Vec<AssistanceResult>,
    pub overall_rpe: Option<u8>,
    pub notes: Option<String>,
    pub duration_minutes: Option<u32>,
    pub body_weight: Option<Decimal>,
    pub completed_at: NaiveDateTime,
}

impl WorkoutResult {
    /// Builds a result that records the workout as performed exactly as
    /// prescribed. Callers adjust individual sets (typically the AMRAP set's
    /// actual reps) before persisting.
    pub fn from_planned(plan_id: Uuid, workout: &Workout, completed_at: NaiveDateTime) -> Self {
        let as_performed = |sets: &[super::workout::SetPrescription]| -> Vec<SetResult> {
            sets.iter()
                .map(|s| SetResult {
                    planned_reps: s.reps,
                    actual_reps: s.reps,
                    weight: s.weight,
                    percentage: s.percentage,
                    is_amrap: s.is_amrap,
                    rpe: None,
                    note: None,
                })
                .collect()
        };

        Self {
            result_id: Self::id_for(&workout.workout_id, completed_at),
            plan_id,
            workout_id: workout.workout_id.clone(),
            week: Some(workout.week),
            day: Some(workout.day),
            exercise_id: workout.exercise_id.clone(),
            warmup_sets: as_performed(&workout.warmup_sets),
            main_sets: as_performed(&workout.main_sets),
            assistance: Vec::new(),
            overall_rpe: None,
            notes: None,
            duration_minutes: None,
            body_weight: None,
            completed_at,
        }
    }

    /// Builds an empty result shell for a custom-plan workout, which has no
    /// prescription to copy and no week/day slot.
    pub fn for_custom(
        plan_id: Uuid,
        workout: &super::plan::CustomWorkout,
        completed_at: NaiveDateTime,
    ) -> Self {
        Self {
            result_id: Self::id_for(&workout.workout_id, completed_at),
            plan_id,
            workout_id: workout.workout_id.clone(),
            week: None,
            day: None,
            exercise_id: workout.exercise_id.clone(),
            warmup_sets: Vec::new(),
            main_sets: Vec::new(),
            assistance: Vec::new(),
            overall_rpe: None,
            notes: None,
            duration_minutes: None,
            body_weight: None,
            completed_at,
        }
    }

    pub fn id_for(workout_id: &str, completed_at: NaiveDateTime) -> String {
        format!(
            "{workout_id}-{}",
            completed_at.and_utc().timestamp_millis()
        )
    }

    /// The final main set, which is the AMRAP set in weeks 1–3.
    pub fn amrap_set(&self) -> Option<&SetResult> {
        self.main_sets.iter().find(|s| s.is_amrap)
    }
}
