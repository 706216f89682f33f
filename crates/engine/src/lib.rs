//! 5/3/1 cycle generation and progression engine.
//!
//! The pure core of the training tracker: 1RM estimation formulas,
//! training-max and plate rounding, the four-week cycle generator, the
//! workout-suggestion engine, and the plan unification adapter. Everything
//! here is synchronous and side-effect free; persistence and presentation
//! live in the sibling crates.

pub mod dto;
pub mod error;
pub mod models;
pub mod services;

pub use error::{EngineError, Result};
