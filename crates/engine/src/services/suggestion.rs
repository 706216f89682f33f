//! Workout suggestion and progress tracking.
//!
//! Pure functions over `(plan, results, today)`. The engine filters results
//! by plan id itself; callers hand over history unfiltered and re-invoke
//! after persisting new results.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::dto::suggestion::{CycleProgress, Recommendation, WeekProgress, WorkoutSuggestion};
use crate::models::{CustomPlan, FiveThreeOnePlan, WorkoutPlan, WorkoutResult};

const WEEKS: u8 = 4;

/// Scheduling heuristics for classifying how urgent the next workout is.
///
/// These are reasonable defaults, not calendar facts: a week is assumed to
/// hold 7 days with sessions every 2 days, and a workout counts as "today"
/// until it is more than `overdue_cutoff_days` past its expected date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub days_per_week: i64,
    pub days_between_sessions: i64,
    pub overdue_cutoff_days: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            days_per_week: 7,
            days_between_sessions: 2,
            overdue_cutoff_days: 3,
        }
    }
}

impl ScheduleConfig {
    /// Expected calendar date of a (week, day) slot relative to the cycle
    /// start.
    pub fn expected_date(&self, start_date: NaiveDate, week: u8, day: u8) -> NaiveDate {
        start_date
            + Duration::days(
                i64::from(week - 1) * self.days_per_week
                    + i64::from(day - 1) * self.days_between_sessions,
            )
    }

    pub fn classify(&self, days_until_due: i64) -> Recommendation {
        if days_until_due > 0 {
            Recommendation::Upcoming
        } else if days_until_due >= -self.overdue_cutoff_days {
            Recommendation::Today
        } else {
            Recommendation::Overdue
        }
    }
}

/// Determines the next workout due for a plan, or `None` once every workout
/// has been logged. "Nothing left to suggest" is a terminal state, not an
/// error.
pub fn next_workout(
    plan: &WorkoutPlan,
    results: &[WorkoutResult],
    today: NaiveDate,
    schedule: &ScheduleConfig,
) -> Option<WorkoutSuggestion> {
    let plan_results = results_for_plan(plan, results);
    let last_completed = plan_results.iter().map(|r| r.completed_at).max();

    match plan {
        WorkoutPlan::FiveThreeOne(p) => {
            next_scheduled(p, &plan_results, last_completed, today, schedule)
        }
        WorkoutPlan::Custom(p) => next_unscheduled(p, &plan_results, last_completed),
    }
}

fn next_scheduled(
    plan: &FiveThreeOnePlan,
    results: &[&WorkoutResult],
    last_completed: Option<NaiveDateTime>,
    today: NaiveDate,
    schedule: &ScheduleConfig,
) -> Option<WorkoutSuggestion> {
    let completed: HashSet<(u8, u8)> = results
        .iter()
        .filter_map(|r| Some((r.week?, r.day?)))
        .collect();

    // Scan slots in (week, day) order; the first one never logged is next.
    let mut slots: Vec<_> = plan.workouts.iter().collect();
    slots.sort_by_key(|w| (w.week, w.day));
    let workout = slots
        .into_iter()
        .find(|w| !completed.contains(&(w.week, w.day)))?;

    let expected = schedule.expected_date(plan.start_date, workout.week, workout.day);
    let days_until_due = (expected - today).num_days();

    Some(WorkoutSuggestion {
        workout_id: workout.workout_id.clone(),
        exercise_id: workout.exercise_id.clone(),
        exercise_name: workout.exercise_name.clone(),
        workout: Some(workout.clone()),
        last_completed,
        recommendation: schedule.classify(days_until_due),
        days_until_due: Some(days_until_due),
        is_next_workout: true,
    })
}

fn next_unscheduled(
    plan: &CustomPlan,
    results: &[&WorkoutResult],
    last_completed: Option<NaiveDateTime>,
) -> Option<WorkoutSuggestion> {
    let completed: HashSet<&str> = results.iter().map(|r| r.workout_id.as_str()).collect();

    let workout = plan
        .workouts
        .iter()
        .find(|w| !completed.contains(w.workout_id.as_str()))?;

    // Custom plans carry no schedule; the next workout is always due now.
    Some(WorkoutSuggestion {
        workout_id: workout.workout_id.clone(),
        exercise_id: workout.exercise_id.clone(),
        exercise_name: workout.exercise_name.clone(),
        workout: None,
        last_completed,
        recommendation: Recommendation::Today,
        days_until_due: None,
        is_next_workout: true,
    })
}

/// Aggregate completion statistics for a plan. For 5/3/1 plans this also
/// breaks progress down per week and reports the current week.
pub fn cycle_progress(plan: &WorkoutPlan, results: &[WorkoutResult]) -> CycleProgress {
    let plan_results = results_for_plan(plan, results);
    let total = plan.workout_count();

    match plan {
        WorkoutPlan::FiveThreeOne(p) => {
            let completed: HashSet<(u8, u8)> = plan_results
                .iter()
                .filter_map(|r| Some((r.week?, r.day?)))
                .collect();

            let weeks: Vec<WeekProgress> = (1..=WEEKS)
                .map(|week| {
                    let workout_count = p.workouts.iter().filter(|w| w.week == week).count();
                    let mut completed_days: Vec<u8> = completed
                        .iter()
                        .filter(|(w, _)| *w == week)
                        .map(|&(_, d)| d)
                        .collect();
                    completed_days.sort_unstable();

                    WeekProgress {
                        week,
                        is_complete: workout_count > 0 && completed_days.len() >= workout_count,
                        completed_days,
                        workout_count,
                    }
                })
                .collect();

            let current_week = weeks
                .iter()
                .find(|w| !w.is_complete)
                .map(|w| w.week)
                .unwrap_or(WEEKS);

            CycleProgress {
                completed_workouts: completed.len(),
                total_workouts: total,
                percent_complete: percent(completed.len(), total),
                current_week: Some(current_week),
                weeks_progress: Some(weeks),
            }
        }
        WorkoutPlan::Custom(p) => {
            let completed: HashSet<&str> =
                plan_results.iter().map(|r| r.workout_id.as_str()).collect();
            let completed_count = p
                .workouts
                .iter()
                .filter(|w| completed.contains(w.workout_id.as_str()))
                .count();

            CycleProgress {
                completed_workouts: completed_count,
                total_workouts: total,
                percent_complete: percent(completed_count, total),
                current_week: None,
                weeks_progress: None,
            }
        }
    }
}

fn results_for_plan<'a>(plan: &WorkoutPlan, results: &'a [WorkoutResult]) -> Vec<&'a WorkoutResult> {
    let plan_id = plan.plan_id();
    results.iter().filter(|r| r.plan_id == plan_id).collect()
}

fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::generator::LiftMaxInput;
    use crate::models::{Cycle, CustomWorkout, WorkoutPlan};
    use crate::services::plan_adapter;
    use crate::services::rounding::PlateRounding;
    use crate::services::cycle_generator::generate_workouts;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn two_lift_cycle(start: NaiveDate) -> Cycle {
        let maxes = LiftMaxInput::into_training_maxes(vec![
            LiftMaxInput {
                exercise_id: "squat".to_string(),
                exercise_name: "Squat".to_string(),
                one_rep_max: Decimal::from(400),
            },
            LiftMaxInput {
                exercise_id: "bench-press".to_string(),
                exercise_name: "Bench Press".to_string(),
                one_rep_max: Decimal::from(300),
            },
        ])
        .unwrap();

        let workouts = generate_workouts(&maxes, &PlateRounding::default());
        Cycle::new("Test cycle", start, maxes, workouts)
    }

    fn log(cycle: &Cycle, week: u8, day: u8) -> WorkoutResult {
        let workout = cycle.workout(week, day).unwrap();
        WorkoutResult::from_planned(cycle.cycle_id, workout, Utc::now().naive_utc())
    }

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn test_fresh_cycle_suggests_week_one_day_one() {
        let cycle = two_lift_cycle(start_date());
        let plan = plan_adapter::unify_cycle(&cycle);

        let suggestion =
            next_workout(&plan, &[], start_date(), &ScheduleConfig::default()).unwrap();
        let workout = suggestion.workout.as_ref().unwrap();
        assert_eq!((workout.week, workout.day), (1, 1));
        assert_eq!(suggestion.exercise_id, "squat");
        assert!(suggestion.is_next_workout);
        assert!(suggestion.last_completed.is_none());
    }

    #[test]
    fn test_progression_through_the_cycle() {
        let cycle = two_lift_cycle(start_date());
        let plan = plan_adapter::unify_cycle(&cycle);
        let schedule = ScheduleConfig::default();

        let mut results = vec![log(&cycle, 1, 1)];
        let next = next_workout(&plan, &results, start_date(), &schedule).unwrap();
        let workout = next.workout.as_ref().unwrap();
        assert_eq!((workout.week, workout.day), (1, 2));

        results.push(log(&cycle, 1, 2));
        let next = next_workout(&plan, &results, start_date(), &schedule).unwrap();
        let workout = next.workout.as_ref().unwrap();
        assert_eq!((workout.week, workout.day), (2, 1));
    }

    #[test]
    fn test_finished_cycle_has_no_next_workout() {
        let cycle = two_lift_cycle(start_date());
        let plan = plan_adapter::unify_cycle(&cycle);

        let results: Vec<WorkoutResult> = cycle
            .workouts
            .iter()
            .map(|w| WorkoutResult::from_planned(cycle.cycle_id, w, Utc::now().naive_utc()))
            .collect();

        assert!(next_workout(&plan, &results, start_date(), &ScheduleConfig::default()).is_none());
    }

    #[test]
    fn test_results_from_other_plans_are_ignored() {
        let cycle = two_lift_cycle(start_date());
        let plan = plan_adapter::unify_cycle(&cycle);

        let mut foreign = log(&cycle, 1, 1);
        foreign.plan_id = Uuid::new_v4();

        let suggestion =
            next_workout(&plan, &[foreign], start_date(), &ScheduleConfig::default()).unwrap();
        let workout = suggestion.workout.as_ref().unwrap();
        assert_eq!((workout.week, workout.day), (1, 1));
    }

    #[test]
    fn test_urgency_classification() {
        let schedule = ScheduleConfig::default();
        assert_eq!(schedule.classify(5), Recommendation::Upcoming);
        assert_eq!(schedule.classify(1), Recommendation::Upcoming);
        assert_eq!(schedule.classify(0), Recommendation::Today);
        assert_eq!(schedule.classify(-3), Recommendation::Today);
        assert_eq!(schedule.classify(-4), Recommendation::Overdue);
    }

    #[test]
    fn test_expected_dates_follow_schedule() {
        let cycle = two_lift_cycle(start_date());
        let plan = plan_adapter::unify_cycle(&cycle);
        let schedule = ScheduleConfig::default();

        // (1,1) is expected on the start date itself
        let on_time = next_workout(&plan, &[], start_date(), &schedule).unwrap();
        assert_eq!(on_time.days_until_due, Some(0));
        assert_eq!(on_time.recommendation, Recommendation::Today);

        // Viewed a week early it is upcoming, ten days late it is overdue
        let early = next_workout(&plan, &[], start_date() - Duration::days(7), &schedule).unwrap();
        assert_eq!(early.days_until_due, Some(7));
        assert_eq!(early.recommendation, Recommendation::Upcoming);

        let late = next_workout(&plan, &[], start_date() + Duration::days(10), &schedule).unwrap();
        assert_eq!(late.recommendation, Recommendation::Overdue);

        let results = vec![
            log(&cycle, 1, 1),
            log(&cycle, 1, 2),
            log(&cycle, 2, 1),
            log(&cycle, 2, 2),
        ];
        // Only days 1 and 2 exist in a two-lift cycle, so (3,1) is next
        let next = next_workout(&plan, &results, start_date(), &schedule).unwrap();
        let workout = next.workout.as_ref().unwrap();
        assert_eq!((workout.week, workout.day), (3, 1));
        assert_eq!(
            schedule.expected_date(start_date(), 3, 1),
            start_date() + Duration::days(14)
        );
    }

    #[test]
    fn test_progress_math() {
        let cycle = two_lift_cycle(start_date());
        let plan = plan_adapter::unify_cycle(&cycle);

        let results = vec![log(&cycle, 1, 1), log(&cycle, 1, 2)];
        let progress = cycle_progress(&plan, &results);

        assert_eq!(progress.completed_workouts, 2);
        assert_eq!(progress.total_workouts, 8);
        assert_eq!(progress.percent_complete, 25);
        // Week 1 fully logged, so week 2 is current
        assert_eq!(progress.current_week, Some(2));

        let weeks = progress.weeks_progress.unwrap();
        assert!(weeks[0].is_complete);
        assert_eq!(weeks[0].completed_days, vec![1, 2]);
        assert!(!weeks[1].is_complete);
        assert!(weeks[1].completed_days.is_empty());
    }

    #[test]
    fn test_repeat_attempts_count_once() {
        let cycle = two_lift_cycle(start_date());
        let plan = plan_adapter::unify_cycle(&cycle);

        let results = vec![log(&cycle, 1, 1), log(&cycle, 1, 1)];
        let progress = cycle_progress(&plan, &results);
        assert_eq!(progress.completed_workouts, 1);
    }

    #[test]
    fn test_fully_logged_cycle_reports_week_four() {
        let cycle = two_lift_cycle(start_date());
        let plan = plan_adapter::unify_cycle(&cycle);

        let results: Vec<WorkoutResult> = cycle
            .workouts
            .iter()
            .map(|w| WorkoutResult::from_planned(cycle.cycle_id, w, Utc::now().naive_utc()))
            .collect();

        let progress = cycle_progress(&plan, &results);
        assert_eq!(progress.percent_complete, 100);
        assert_eq!(progress.current_week, Some(4));
    }

    fn custom_plan() -> (WorkoutPlan, Uuid) {
        let plan_id = Uuid::new_v4();
        let workouts = vec![
            CustomWorkout {
                workout_id: "push-a".to_string(),
                exercise_id: "bench-press".to_string(),
                exercise_name: "Bench Press".to_string(),
            },
            CustomWorkout {
                workout_id: "pull-a".to_string(),
                exercise_id: "barbell-row".to_string(),
                exercise_name: "Barbell Row".to_string(),
            },
        ];
        (
            plan_adapter::unify_custom(plan_id, "Push/Pull", workouts),
            plan_id,
        )
    }

    #[test]
    fn test_custom_plan_progression_is_always_today() {
        let (plan, plan_id) = custom_plan();
        let schedule = ScheduleConfig::default();

        let first = next_workout(&plan, &[], start_date(), &schedule).unwrap();
        assert_eq!(first.workout_id, "push-a");
        assert_eq!(first.recommendation, Recommendation::Today);
        assert!(first.days_until_due.is_none());
        assert!(first.workout.is_none());

        let logged = match &plan {
            WorkoutPlan::Custom(p) => {
                WorkoutResult::for_custom(plan_id, &p.workouts[0], Utc::now().naive_utc())
            }
            WorkoutPlan::FiveThreeOne(_) => unreachable!(),
        };
        assert!(logged.week.is_none());

        let second = next_workout(&plan, &[logged], start_date(), &schedule).unwrap();
        assert_eq!(second.workout_id, "pull-a");

        let progress = cycle_progress(&plan, &[]);
        assert!(progress.current_week.is_none());
        assert!(progress.weeks_progress.is_none());
    }
}
