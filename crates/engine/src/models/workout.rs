use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One planned set: reps and percentage of the training max, with the
/// plate-rounded weight already derived.
///
/// `reps` is always stored as the plain integer; the "N+" form for AMRAP
/// sets is a display concern only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPrescription {
    pub reps: u32,
    /// Percentage of the training max (40–100).
    pub percentage: u32,
    pub weight: Decimal,
    pub is_amrap: bool,
}

impl SetPrescription {
    /// Rep scheme as shown to the user: "5+" for an AMRAP set, "5" otherwise.
    pub fn rep_scheme(&self) -> String {
        if self.is_amrap {
            format!("{}+", self.reps)
        } else {
            self.reps.to_string()
        }
    }
}

/// One training day within a cycle.
///
/// Generated in bulk when a cycle is created and never individually edited;
/// users log results against a workout, they do not edit the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Deterministic id, unique within a cycle.
    pub workout_id: String,
    pub week: u8,
    pub day: u8,
    pub exercise_id: String,
    pub exercise_name: String,
    pub warmup_sets: Vec<SetPrescription>,
    /// Exactly 3 main sets.
    pub main_sets: Vec<SetPrescription>,
    /// Suggested accessory exercise names, not prescribed sets.
    pub assistance: Vec<String>,
}

impl Workout {
    pub fn id_for(exercise_id: &str, week: u8, day: u8) -> String {
        format!("{exercise_id}-w{week}d{day}")
    }
}
