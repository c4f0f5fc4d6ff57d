use serde::{Deserialize, Serialize};

/// Structured verdict produced by a risk classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskVerdict {
    pub is_risky: bool,
    pub message: String,
}
