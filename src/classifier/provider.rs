use async_trait::async_trait;
use crate::errors::CampusGuardError;
use crate::reputation::ReputationReport;
use super::types::RiskVerdict;

#[async_trait]
pub trait RiskClassifier: Send + Sync {
    /// Produce a structured risk verdict for a URL given its reputation counts.
    async fn classify(
        &self,
        url: &str,
        report: &ReputationReport,
    ) -> Result<RiskVerdict, CampusGuardError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
