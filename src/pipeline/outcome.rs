use serde::{Deserialize, Serialize};
use crate::reputation::ReputationReport;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScanVerdict {
    Safe,
    Warning,
}

impl ScanVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
        }
    }
}

/// Result of one scan invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub id: String,
    pub url: String,
    pub verdict: ScanVerdict,
    pub report: ReputationReport,
    /// Advisory copy shown to the user: the classifier's message on a
    /// warning, fixed reassurance on a safe result.
    pub message: String,
}
