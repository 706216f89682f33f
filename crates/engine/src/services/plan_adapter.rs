//! Normalizes 5/3/1 cycles and free-form workout lists into the unified
//! plan shape the suggestion engine operates over.
//!
//! Both mappings are deterministic and lossless: week/day survive the trip
//! for cycle-origin workouts and simply do not exist for custom ones.

use uuid::Uuid;

use crate::models::{CustomPlan, CustomWorkout, Cycle, FiveThreeOnePlan, WorkoutPlan};

/// Lifts a generated cycle into the unified plan shape, preserving every
/// workout's week/day exactly.
pub fn unify_cycle(cycle: &Cycle) -> WorkoutPlan {
    WorkoutPlan::FiveThreeOne(FiveThreeOnePlan {
        plan_id: cycle.cycle_id,
        name: cycle.name.clone(),
        start_date: cycle.start_date,
        workouts: cycle.workouts.clone(),
    })
}

/// Wraps a user-authored workout list into the unified plan shape. The list
/// order defines the plan's sequence.
pub fn unify_custom(
    plan_id: Uuid,
    name: impl Into<String>,
    workouts: Vec<CustomWorkout>,
) -> WorkoutPlan {
    WorkoutPlan::Custom(CustomPlan {
        plan_id,
        name: name.into(),
        workouts,
    })
}
