pub mod cycle;
pub mod record;
pub mod result;

pub use cycle::CycleRepository;
pub use record::RecordRepository;
pub use result::ResultRepository;
