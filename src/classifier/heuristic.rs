use async_trait::async_trait;
use crate::errors::CampusGuardError;
use crate::reputation::ReputationReport;
use super::provider::RiskClassifier;
use super::types::RiskVerdict;

/// URL substrings that mark a link as risky without any remote call.
const RISKY_PATTERNS: &[&str] = &["repair", "admin"];

pub const FALLBACK_MESSAGE: &str =
    "AI verification failed, but this link looks risky. Treat it with caution.";

/// Deterministic keyword verdict: risky iff the URL contains a known pattern.
pub fn keyword_risky(url: &str) -> bool {
    RISKY_PATTERNS.iter().any(|p| url.contains(p))
}

/// Terminal fallback verdict used when a remote classifier fails. Infallible.
pub fn fallback_verdict(url: &str) -> RiskVerdict {
    RiskVerdict {
        is_risky: keyword_risky(url),
        message: FALLBACK_MESSAGE.to_string(),
    }
}

/// Keyword classifier as a first-class strategy, selectable by configuration.
pub struct HeuristicClassifier;

#[async_trait]
impl RiskClassifier for HeuristicClassifier {
    async fn classify(
        &self,
        url: &str,
        _report: &ReputationReport,
    ) -> Result<RiskVerdict, CampusGuardError> {
        let is_risky = keyword_risky(url);
        let message = if is_risky {
            "This link matches known phishing patterns. Stay away from it."
        } else {
            "No risky patterns detected in this link."
        };
        Ok(RiskVerdict { is_risky, message: message.to_string() })
    }

    fn provider_name(&self) -> &str { "heuristic" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_flags_admin_and_repair() {
        let v = fallback_verdict("http://x.com/wp-admin/repair");
        assert!(v.is_risky);
        assert!(!v.message.is_empty());
    }

    #[test]
    fn test_fallback_clean_url() {
        let v = fallback_verdict("http://example.com/about");
        assert!(!v.is_risky);
        assert!(!v.message.is_empty());
    }

    #[tokio::test]
    async fn test_heuristic_classifier_never_errors() {
        let c = HeuristicClassifier;
        let report = ReputationReport { malicious: 99, suspicious: 0 };
        let v = c.classify("http://example.com/about", &report).await.unwrap();
        assert!(!v.is_risky);
    }
}
