use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::training_max::TrainingMax;
use super::workout::Workout;

/// A four-week 5/3/1 training cycle: the aggregate root the generator
/// produces and results are logged against.
///
/// At most one cycle is active at a time; activation is enforced
/// best-effort by the storage layer, not by this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cycle {
    pub cycle_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub created_at: NaiveDateTime,
    /// Maxes frozen in at creation, one per main lift.
    pub training_maxes: Vec<TrainingMax>,
    /// 4 weeks × one workout per lift, in (week, day) order.
    pub workouts: Vec<Workout>,
    pub is_active: bool,
    pub notes: Option<String>,
}

impl Cycle {
    /// Wraps a generated workout list into a new, inactive cycle. The id and
    /// creation timestamp are the only non-deterministic parts; the workout
    /// list itself comes from the pure generator.
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        training_maxes: Vec<TrainingMax>,
        workouts: Vec<Workout>,
    ) -> Self {
        Self {
            cycle_id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            created_at: Utc::now().naive_utc(),
            training_maxes,
            workouts,
            is_active: false,
            notes: None,
        }
    }

    pub fn workout(&self, week: u8, day: u8) -> Option<&Workout> {
        self.workouts
            .iter()
            .find(|w| w.week == week && w.day == day)
    }

    pub fn workout_by_id(&self, workout_id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.workout_id == workout_id)
    }
}
