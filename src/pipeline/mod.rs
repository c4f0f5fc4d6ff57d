pub mod orchestrator;
pub mod outcome;

pub use orchestrator::ScanOrchestrator;
pub use outcome::{ScanOutcome, ScanVerdict};
