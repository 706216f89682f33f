pub mod cycle;
pub mod formula;
pub mod plan;
pub mod record;
pub mod result;
pub mod training_max;
pub mod workout;

pub use cycle::Cycle;
pub use formula::Formula;
pub use plan::{CustomPlan, CustomWorkout, FiveThreeOnePlan, WorkoutPlan};
pub use record::OneRepMaxRecord;
pub use result::{AssistanceResult, SetResult, WorkoutResult};
pub use training_max::TrainingMax;
pub use workout::{SetPrescription, Workout};
