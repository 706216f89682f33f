use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::formula::Formula;

/// A single measured or calculated one-rep-max event.
///
/// Records are immutable once created; users delete them explicitly but
/// never edit them in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneRepMaxRecord {
    pub record_id: Uuid,
    pub exercise_id: String,
    pub exercise_name: String,
    /// The performed set the estimate was derived from.
    pub reps: u32,
    pub weight: Decimal,
    /// Estimated 1RM, rounded to 2 decimal places.
    pub estimated_max: Decimal,
    pub formula: Formula,
    pub recorded_at: NaiveDateTime,
    pub note: Option<String>,
}
