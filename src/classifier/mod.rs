pub mod provider;
pub mod gemini;
pub mod heuristic;
pub mod router;
pub mod types;

pub use provider::RiskClassifier;
pub use router::{classify_or_fallback, create_classifier};
pub use types::RiskVerdict;
