//! Helpers around the 1RM record history: building new records, picking
//! personal bests, and turning history into generator input.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::generator::LiftMaxInput;
use crate::error::Result;
use crate::models::{Formula, OneRepMaxRecord};
use crate::services::formulas;

/// Builds a record from a performed set. Uses Epley unless the user picked
/// another formula explicitly.
pub fn build_record(
    exercise_id: impl Into<String>,
    exercise_name: impl Into<String>,
    reps: u32,
    weight: Decimal,
    formula: Option<Formula>,
    note: Option<String>,
) -> Result<OneRepMaxRecord> {
    let formula = formula.unwrap_or_default();
    let estimated_max = formulas::estimate_one_rep_max(formula, reps, weight)?;

    Ok(OneRepMaxRecord {
        record_id: Uuid::new_v4(),
        exercise_id: exercise_id.into(),
        exercise_name: exercise_name.into(),
        reps,
        weight,
        estimated_max,
        formula,
        recorded_at: Utc::now().naive_utc(),
        note,
    })
}

/// Best historical record per exercise, by estimated max.
pub fn best_by_exercise(records: &[OneRepMaxRecord]) -> HashMap<&str, &OneRepMaxRecord> {
    let mut best: HashMap<&str, &OneRepMaxRecord> = HashMap::new();

    for record in records {
        best.entry(record.exercise_id.as_str())
            .and_modify(|current| {
                if record.estimated_max > current.estimated_max {
                    *current = record;
                }
            })
            .or_insert(record);
    }

    best
}

/// Whether an estimate beats everything on file for its exercise. New
/// exercises always count as a PR.
pub fn is_personal_record(
    exercise_id: &str,
    estimate: Decimal,
    records: &[OneRepMaxRecord],
) -> bool {
    records
        .iter()
        .filter(|r| r.exercise_id == exercise_id)
        .all(|r| estimate > r.estimated_max)
}

/// Turns best historical records into generator input, ordered by the given
/// lift list. Lifts with no history are skipped; the generator is total over
/// whatever remains.
pub fn lift_inputs_from_records(
    lift_order: &[&str],
    records: &[OneRepMaxRecord],
) -> Vec<LiftMaxInput> {
    let best = best_by_exercise(records);

    lift_order
        .iter()
        .filter_map(|id| best.get(id))
        .map(|record| LiftMaxInput {
            exercise_id: record.exercise_id.clone(),
            exercise_name: record.exercise_name.clone(),
            one_rep_max: record.estimated_max,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(exercise_id: &str, reps: u32, weight: i64) -> OneRepMaxRecord {
        build_record(
            exercise_id,
            exercise_id.to_uppercase(),
            reps,
            Decimal::from(weight),
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_build_record_defaults_to_epley() {
        let rec = record("squat", 5, 315);
        assert_eq!(rec.formula, Formula::Epley);
        // 315 × (1 + 0.0333 × 5) = 367.4475
        assert_eq!(rec.estimated_max, Decimal::new(36745, 2));
    }

    #[test]
    fn test_best_by_exercise_picks_highest_estimate() {
        let records = vec![record("squat", 5, 315), record("squat", 3, 350)];
        let best = best_by_exercise(&records);
        // 350 × 1.0999 = 384.97 beats 367.45
        assert_eq!(best["squat"].weight, Decimal::from(350));
    }

    #[test]
    fn test_personal_record_detection() {
        let records = vec![record("squat", 5, 315)];
        assert!(is_personal_record("squat", Decimal::from(400), &records));
        assert!(!is_personal_record("squat", Decimal::from(300), &records));
        assert!(is_personal_record("bench-press", Decimal::from(200), &records));
    }

    #[test]
    fn test_lift_inputs_follow_requested_order_and_skip_missing() {
        let records = vec![record("bench-press", 5, 225), record("squat", 5, 315)];

        let inputs = lift_inputs_from_records(
            &["squat", "bench-press", "deadlift", "overhead-press"],
            &records,
        );

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].exercise_id, "squat");
        assert_eq!(inputs[1].exercise_id, "bench-press");
    }
}
