use tracing::warn;
use crate::config::ClassifierKind;
use crate::errors::CampusGuardError;
use crate::reputation::ReputationReport;
use super::gemini::GeminiClassifier;
use super::heuristic::{fallback_verdict, HeuristicClassifier};
use super::provider::RiskClassifier;
use super::types::RiskVerdict;

/// Instantiate the configured classifier strategy.
pub fn create_classifier(
    kind: ClassifierKind,
    api_key: &str,
    model: Option<&str>,
    base_url: Option<&str>,
) -> Result<Box<dyn RiskClassifier>, CampusGuardError> {
    match kind {
        ClassifierKind::Gemini => {
            if api_key.is_empty() {
                return Err(CampusGuardError::Config(
                    "Gemini classifier requires an API key (classifier.api_key or $GEMINI_API_KEY)".into()
                ));
            }
            Ok(Box::new(GeminiClassifier::new(api_key, model, base_url)))
        }
        ClassifierKind::Heuristic => Ok(Box::new(HeuristicClassifier)),
    }
}

/// Run the classifier with the keyword fallback as its terminal error
/// boundary. Any transport, status, or parse failure degrades to a
/// deterministic verdict; this never returns an error.
pub async fn classify_or_fallback(
    classifier: &dyn RiskClassifier,
    url: &str,
    report: &ReputationReport,
) -> RiskVerdict {
    match classifier.classify(url, report).await {
        Ok(verdict) => verdict,
        Err(e) => {
            warn!(provider = classifier.provider_name(), error = %e, "Classifier failed, using keyword fallback");
            fallback_verdict(url)
        }
    }
}
