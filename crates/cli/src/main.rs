use std::str::FromStr;

use anyhow::{Context, bail};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use engine::dto::generator::LiftMaxInput;
use engine::dto::suggestion::Recommendation;
use engine::models::{Cycle, Formula, WorkoutResult};
use engine::services::rounding::PlateRounding;
use engine::services::suggestion::ScheduleConfig;
use engine::services::{cycle_generator, formulas, plan_adapter, records, suggestion};
use rust_decimal::Decimal;
use storage::{CycleRepository, MemoryStore, RecordRepository, ResultRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

mod config;

use config::Config;

/// The conventional 5/3/1 lift order, used when building a cycle straight
/// from the record history.
const DEFAULT_LIFTS: [&str; 4] = ["squat", "bench-press", "deadlift", "overhead-press"];

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Personal 5/3/1 strength-training tracker", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a one-rep max estimated from a performed set
    Max {
        /// Exercise id, e.g. `squat` or `bench-press`
        #[arg(long)]
        exercise: String,

        #[arg(long)]
        reps: u32,

        #[arg(long)]
        weight: Decimal,

        /// epley (default), brzycki, lander or lombardi
        #[arg(long)]
        formula: Option<Formula>,

        #[arg(long)]
        note: Option<String>,
    },
    /// Create, list or activate training cycles
    Cycle {
        #[command(subcommand)]
        command: CycleCommands,
    },
    /// Show the next workout due for the active cycle
    Next,
    /// Show completion progress for the active cycle
    Progress,
    /// Log a workout from the active cycle as completed
    Log {
        #[arg(long)]
        week: u8,

        #[arg(long)]
        day: u8,

        /// Actual reps achieved on the final (AMRAP) main set
        #[arg(long)]
        amrap_reps: Option<u32>,

        /// Overall session RPE, 1-10
        #[arg(long)]
        rpe: Option<u8>,

        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
enum CycleCommands {
    /// Generate a four-week cycle from one-rep maxes
    New {
        #[arg(long)]
        name: String,

        /// Cycle start date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Per-lift 1RM as `exercise=weight`, repeatable. Omit to use the
        /// best records on file for the four main lifts.
        #[arg(long = "max", value_parser = parse_max)]
        maxes: Vec<(String, Decimal)>,

        /// Make this the active cycle
        #[arg(long)]
        activate: bool,
    },
    List,
    Activate {
        cycle_id: Uuid,
    },
}

fn parse_max(raw: &str) -> Result<(String, Decimal), String> {
    let (exercise, weight) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected exercise=weight, got `{raw}`"))?;
    let weight = Decimal::from_str(weight.trim()).map_err(|e| e.to_string())?;
    Ok((exercise.trim().to_string(), weight))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("tracker={log_level},storage={log_level},engine={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let store = MemoryStore::open(config.data_path.clone())
        .await
        .with_context(|| format!("Cannot open {}", config.data_path.display()))?;

    match cli.command {
        Commands::Max {
            exercise,
            reps,
            weight,
            formula,
            note,
        } => handle_max(&store, exercise, reps, weight, formula, note).await?,
        Commands::Cycle { command } => match command {
            CycleCommands::New {
                name,
                start,
                maxes,
                activate,
            } => handle_cycle_new(&store, name, start, maxes, activate).await?,
            CycleCommands::List => handle_cycle_list(&store).await?,
            CycleCommands::Activate { cycle_id } => {
                let cycle = CycleRepository::new(&store).set_active(cycle_id).await?;
                println!("Activated cycle `{}`", cycle.name);
            }
        },
        Commands::Next => handle_next(&store).await?,
        Commands::Progress => handle_progress(&store).await?,
        Commands::Log {
            week,
            day,
            amrap_reps,
            rpe,
            notes,
        } => handle_log(&store, week, day, amrap_reps, rpe, notes).await?,
    }

    store
        .flush()
        .await
        .with_context(|| format!("Cannot write {}", config.data_path.display()))?;

    Ok(())
}

async fn handle_max(
    store: &MemoryStore,
    exercise: String,
    reps: u32,
    weight: Decimal,
    formula: Option<Formula>,
    note: Option<String>,
) -> anyhow::Result<()> {
    let repo = RecordRepository::new(store);

    let record = records::build_record(
        exercise.clone(),
        display_name(&exercise),
        reps,
        weight,
        formula,
        note,
    )?;

    let history = repo.list_by_exercise(&exercise).await?;
    let is_pr = records::is_personal_record(&exercise, record.estimated_max, &history);

    repo.save(&record).await?;

    println!(
        "{}: estimated 1RM {} ({} x {}, {})",
        record.exercise_name, record.estimated_max, reps, weight, record.formula
    );
    if is_pr {
        println!("New personal record!");
    }

    Ok(())
}

async fn handle_cycle_new(
    store: &MemoryStore,
    name: String,
    start: Option<NaiveDate>,
    maxes: Vec<(String, Decimal)>,
    activate: bool,
) -> anyhow::Result<()> {
    let inputs: Vec<LiftMaxInput> = if maxes.is_empty() {
        let history = RecordRepository::new(store).list().await?;
        let inputs = records::lift_inputs_from_records(&DEFAULT_LIFTS, &history);
        if inputs.is_empty() {
            bail!("No 1RM records on file; pass --max exercise=weight");
        }
        inputs
    } else {
        maxes
            .into_iter()
            .map(|(exercise_id, one_rep_max)| LiftMaxInput {
                exercise_name: display_name(&exercise_id),
                exercise_id,
                one_rep_max,
            })
            .collect()
    };

    let training_maxes = LiftMaxInput::into_training_maxes(inputs)?;
    let workouts = cycle_generator::generate_workouts(&training_maxes, &PlateRounding::default());
    let start = start.unwrap_or_else(|| Utc::now().date_naive());
    let cycle = Cycle::new(name, start, training_maxes, workouts);

    let repo = CycleRepository::new(store);
    repo.save(&cycle).await?;
    if activate {
        repo.set_active(cycle.cycle_id).await?;
    }

    println!("Cycle `{}` ({})", cycle.name, cycle.cycle_id);
    println!("Starts {}, {} workouts", cycle.start_date, cycle.workouts.len());
    for tm in &cycle.training_maxes {
        println!(
            "  {:<16} 1RM {:>7}  training max {:>7}",
            tm.exercise_name, tm.one_rep_max, tm.training_max
        );
    }

    Ok(())
}

async fn handle_cycle_list(store: &MemoryStore) -> anyhow::Result<()> {
    let cycles = CycleRepository::new(store).list().await?;
    if cycles.is_empty() {
        println!("No cycles yet.");
        return Ok(());
    }

    for cycle in cycles {
        let marker = if cycle.is_active { "*" } else { " " };
        println!(
            "{marker} {}  {}  starts {}  ({} workouts)",
            cycle.cycle_id,
            cycle.name,
            cycle.start_date,
            cycle.workouts.len()
        );
    }

    Ok(())
}

async fn handle_next(store: &MemoryStore) -> anyhow::Result<()> {
    let Some(cycle) = CycleRepository::new(store).find_active().await? else {
        println!("No active cycle. Create one with `tracker cycle new --activate`.");
        return Ok(());
    };

    let plan = plan_adapter::unify_cycle(&cycle);
    let results = ResultRepository::new(store)
        .list_by_plan(cycle.cycle_id)
        .await?;

    let today = Utc::now().date_naive();
    let Some(next) = suggestion::next_workout(&plan, &results, today, &ScheduleConfig::default())
    else {
        println!("Cycle `{}` is complete. Time to start the next one.", cycle.name);
        return Ok(());
    };

    let due = match (next.recommendation, next.days_until_due) {
        (Recommendation::Upcoming, Some(d)) => format!("due in {d} day(s)"),
        (Recommendation::Today, _) => "due today".to_string(),
        (Recommendation::Overdue, Some(d)) => format!("{} day(s) overdue", -d),
        _ => String::new(),
    };

    println!("Next: {} — {}", next.exercise_name, due);
    if let Some(workout) = &next.workout {
        println!("Week {}, day {}", workout.week, workout.day);
        println!("Warmup:");
        for set in &workout.warmup_sets {
            println!("  {:>3} x {:>7}  ({}%)", set.rep_scheme(), set.weight, set.percentage);
        }
        println!("Main sets:");
        for set in &workout.main_sets {
            println!("  {:>3} x {:>7}  ({}%)", set.rep_scheme(), set.weight, set.percentage);
        }
        if !workout.assistance.is_empty() {
            println!("Assistance: {}", workout.assistance.join(", "));
        }
    }

    Ok(())
}

async fn handle_progress(store: &MemoryStore) -> anyhow::Result<()> {
    let Some(cycle) = CycleRepository::new(store).find_active().await? else {
        println!("No active cycle.");
        return Ok(());
    };

    let plan = plan_adapter::unify_cycle(&cycle);
    let results = ResultRepository::new(store)
        .list_by_plan(cycle.cycle_id)
        .await?;

    let progress = suggestion::cycle_progress(&plan, &results);
    println!(
        "Cycle `{}`: {}/{} workouts ({}%)",
        cycle.name, progress.completed_workouts, progress.total_workouts, progress.percent_complete
    );
    if let Some(current_week) = progress.current_week {
        println!("Current week: {current_week}");
    }
    if let Some(weeks) = &progress.weeks_progress {
        for week in weeks {
            let days: Vec<String> = week.completed_days.iter().map(|d| d.to_string()).collect();
            let status = if week.is_complete { "done" } else { "open" };
            println!(
                "  Week {}  {}/{}  [{}]  days: {}",
                week.week,
                week.completed_days.len(),
                week.workout_count,
                status,
                if days.is_empty() { "-".to_string() } else { days.join(",") }
            );
        }
    }

    Ok(())
}

async fn handle_log(
    store: &MemoryStore,
    week: u8,
    day: u8,
    amrap_reps: Option<u32>,
    rpe: Option<u8>,
    notes: Option<String>,
) -> anyhow::Result<()> {
    let Some(cycle) = CycleRepository::new(store).find_active().await? else {
        bail!("No active cycle to log against");
    };
    let Some(workout) = cycle.workout(week, day) else {
        bail!("No workout at week {week}, day {day} in cycle `{}`", cycle.name);
    };

    let mut result = WorkoutResult::from_planned(cycle.cycle_id, workout, Utc::now().naive_utc());
    result.overall_rpe = rpe;
    result.notes = notes;

    if let Some(actual_reps) = amrap_reps {
        if let Some(set) = result.main_sets.iter_mut().find(|s| s.is_amrap) {
            set.actual_reps = actual_reps;

            let estimate = formulas::amrap_estimate(actual_reps, set.weight)?;
            let history = RecordRepository::new(store)
                .list_by_exercise(&workout.exercise_id)
                .await?;
            println!(
                "AMRAP set: {} x {} — estimated 1RM {}",
                actual_reps, set.weight, estimate
            );
            if records::is_personal_record(&workout.exercise_id, estimate, &history) {
                println!("That would be a new personal record. Save it with `tracker max`.");
            }
        } else {
            tracing::warn!(week, day, "Workout has no AMRAP set; ignoring --amrap-reps");
        }
    }

    ResultRepository::new(store).save(&result).await?;
    println!(
        "Logged {} (week {}, day {}) as {}",
        workout.exercise_name, week, day, result.result_id
    );

    Ok(())
}

/// `bench-press` → `Bench Press`.
fn display_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
