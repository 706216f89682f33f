pub mod generator;
pub mod suggestion;

pub use generator::LiftMaxInput;
pub use suggestion::{CycleProgress, Recommendation, WeekProgress, WorkoutSuggestion};
