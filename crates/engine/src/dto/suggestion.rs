use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::Workout;

/// Urgency classification for a suggested workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// Due in the future.
    Upcoming,
    /// Due now or within the overdue-cutoff grace window.
    Today,
    /// Past the grace window.
    Overdue,
    /// Every workout in the plan has been logged.
    Completed,
}

/// The engine's answer to "what should I do next?".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSuggestion {
    pub workout_id: String,
    pub exercise_id: String,
    pub exercise_name: String,
    /// Full prescription for 5/3/1 plans; custom plans carry none.
    pub workout: Option<Workout>,
    /// When anything in this plan was last logged.
    pub last_completed: Option<NaiveDateTime>,
    pub recommendation: Recommendation,
    /// Signed distance to the expected date. Negative means past due.
    /// Absent for custom plans, which carry no schedule.
    pub days_until_due: Option<i64>,
    pub is_next_workout: bool,
}

/// Per-week completion detail for a 5/3/1 plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekProgress {
    pub week: u8,
    /// Day numbers logged within this week, sorted, deduplicated.
    pub completed_days: Vec<u8>,
    /// How many workouts the week holds (one per lift).
    pub workout_count: usize,
    pub is_complete: bool,
}

/// Aggregate completion statistics for a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleProgress {
    pub completed_workouts: usize,
    pub total_workouts: usize,
    /// `completed / total × 100`, rounded to the nearest whole percent.
    pub percent_complete: u32,
    /// First incomplete week, or 4 once every week is done. Only for
    /// 5/3/1 plans.
    pub current_week: Option<u8>,
    /// Only for 5/3/1 plans.
    pub weeks_progress: Option<Vec<WeekProgress>>,
}
