pub mod cycle_generator;
pub mod formulas;
pub mod plan_adapter;
pub mod records;
pub mod rounding;
pub mod suggestion;
