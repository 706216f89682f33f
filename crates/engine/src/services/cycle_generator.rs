//! 5/3/1 cycle generation.
//!
//! Pure wave-periodization arithmetic: given per-lift training maxes, emit
//! the full 4-week workout matrix. Same input always produces the same
//! output; the enclosing `Cycle` is the only place a clock or id generator
//! gets involved.

use crate::models::{SetPrescription, TrainingMax, Workout};
use crate::services::rounding::{self, PlateRounding};

/// Main-set (reps, percentage) rows for weeks 1–4. Week 4 is the deload.
const MAIN_SET_TABLE: [[(u32, u32); 3]; 4] = [
    [(5, 65), (5, 75), (5, 85)],
    [(3, 70), (3, 80), (3, 90)],
    [(5, 75), (3, 85), (1, 95)],
    [(5, 40), (5, 50), (5, 60)],
];

/// Warmup (reps, percentage) rows, identical across weeks.
const WARMUP_TABLE: [(u32, u32); 3] = [(5, 40), (5, 50), (3, 60)];

const WEEKS: u8 = 4;
const DELOAD_WEEK: u8 = 4;

/// Generates the full workout matrix for a cycle: one workout per
/// (lift, week) pair, in (week, day) order.
///
/// The generator is total over its input: a lift with no training max simply
/// has no workouts, and an empty input yields an empty cycle. Day numbers
/// are the 1-indexed position of each lift in the input list.
pub fn generate_workouts(maxes: &[TrainingMax], rounding: &PlateRounding) -> Vec<Workout> {
    let mut workouts = Vec::with_capacity(maxes.len() * WEEKS as usize);

    for week in 1..=WEEKS {
        for (slot, max) in maxes.iter().enumerate() {
            let day = (slot + 1) as u8;
            workouts.push(generate_workout(max, week, day, rounding));
        }
    }

    workouts
}

fn generate_workout(max: &TrainingMax, week: u8, day: u8, rounding: &PlateRounding) -> Workout {
    let warmup_sets = WARMUP_TABLE
        .iter()
        .map(|&(reps, percentage)| SetPrescription {
            reps,
            percentage,
            weight: rounding::weight_for_percentage(max.training_max, percentage, rounding),
            is_amrap: false,
        })
        .collect();

    let row = MAIN_SET_TABLE[usize::from(week) - 1];
    let main_sets = row
        .iter()
        .enumerate()
        .map(|(position, &(reps, percentage))| SetPrescription {
            reps,
            percentage,
            weight: rounding::weight_for_percentage(max.training_max, percentage, rounding),
            // The final main set is a rep-out except on the deload week.
            is_amrap: position == row.len() - 1 && week != DELOAD_WEEK,
        })
        .collect();

    Workout {
        workout_id: Workout::id_for(&max.exercise_id, week, day),
        week,
        day,
        exercise_id: max.exercise_id.clone(),
        exercise_name: max.exercise_name.clone(),
        warmup_sets,
        main_sets,
        assistance: assistance_for(&max.exercise_id),
    }
}

/// Conventional accessory suggestions for the four main lifts. Names only,
/// no prescribed sets; unknown lifts get no suggestions.
pub fn assistance_for(exercise_id: &str) -> Vec<String> {
    let names: &[&str] = match exercise_id {
        "squat" => &["Leg Press", "Leg Curl", "Hanging Leg Raise"],
        "bench-press" | "bench" => &["Dumbbell Bench Press", "Dips", "Triceps Pushdown"],
        "deadlift" => &["Barbell Row", "Good Morning", "Back Extension"],
        "overhead-press" | "press" => &["Chin-Up", "Dumbbell Shoulder Press", "Lateral Raise"],
        _ => &[],
    };

    names.iter().map(|n| n.to_string()).collect()
}
