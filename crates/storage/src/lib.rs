//! Local persistence for the training tracker.
//!
//! A key-value document store with typed repositories over it. All
//! asynchrony in the system lives here; the engine crate stays pure and
//! callers pass repositories the store they want (no global singletons).

pub mod error;
pub mod repository;
pub mod store;

pub use error::{Result, StorageError};
pub use repository::{CycleRepository, RecordRepository, ResultRepository};
pub use store::{DocumentStore, MemoryStore};
