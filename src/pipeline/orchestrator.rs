use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;
use crate::classifier::{classify_or_fallback, create_classifier, RiskClassifier, RiskVerdict};
use crate::config::credentials::redact_credentials;
use crate::config::{resolve_credential, CampusGuardConfig};
use crate::dashboard::{AlertType, DashboardStore, NewAlert, Severity};
use crate::errors::CampusGuardError;
use crate::reputation::{ReputationClient, ReputationReport};
use super::outcome::{ScanOutcome, ScanVerdict};

pub const SAFE_MESSAGE: &str = "Verified safe by AI analysis. Nothing to worry about.";
const ALERT_TITLE: &str = "AI Detection Alert";

/// Sequences one scan: reputation lookup, classification, decision, then
/// side effects on the store. Each invocation is independent; overlapping
/// scans apply their effects in completion order.
pub struct ScanOrchestrator {
    reputation: ReputationClient,
    classifier: Box<dyn RiskClassifier>,
}

impl ScanOrchestrator {
    pub fn new(reputation: ReputationClient, classifier: Box<dyn RiskClassifier>) -> Self {
        Self { reputation, classifier }
    }

    /// Wire up both clients from configuration, with API keys resolvable
    /// from the environment (`$VIRUSTOTAL_API_KEY`, `$GEMINI_API_KEY`).
    pub fn from_config(config: &CampusGuardConfig) -> Result<Self, CampusGuardError> {
        let rep = config.reputation.clone().unwrap_or_default();
        let rep_key = rep.api_key
            .as_deref()
            .map(resolve_credential)
            .or_else(|| std::env::var("VIRUSTOTAL_API_KEY").ok())
            .unwrap_or_default();
        let delay = rep.analysis_delay_secs.map(Duration::from_secs);
        let reputation = ReputationClient::new(&rep_key, rep.base_url.as_deref(), delay);

        let cls = config.classifier.clone().unwrap_or_default();
        let cls_key = cls.api_key
            .as_deref()
            .map(resolve_credential)
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .unwrap_or_default();
        let classifier = create_classifier(
            cls.provider.unwrap_or_default(),
            &cls_key,
            cls.model.as_deref(),
            cls.base_url.as_deref(),
        )?;

        debug!(
            provider = classifier.provider_name(),
            credentials = %redact_credentials(
                &format!("reputation={} classifier={}", rep_key, cls_key),
                &[&rep_key, &cls_key],
            ),
            "Resolved scan credentials"
        );

        Ok(Self::new(reputation, classifier))
    }

    pub async fn scan(
        &self,
        url: &str,
        store: &DashboardStore,
    ) -> Result<ScanOutcome, CampusGuardError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(CampusGuardError::InvalidTarget("URL must not be empty".into()));
        }

        let scan_id = Uuid::new_v4().to_string();
        info!(scan = %scan_id, url, "Starting link scan");

        let report = self.reputation.lookup(url).await;
        let verdict = classify_or_fallback(self.classifier.as_ref(), url, &report).await;

        let outcome = apply_decision(&scan_id, url, report, verdict, store);
        info!(scan = %scan_id, verdict = outcome.verdict.as_str(), "Scan complete");
        Ok(outcome)
    }
}

/// Decision rule: warn iff the reputation service flagged the URL or the
/// classifier judged it risky.
pub fn decide(report: &ReputationReport, verdict: &RiskVerdict) -> ScanVerdict {
    if report.is_flagged() || verdict.is_risky {
        ScanVerdict::Warning
    } else {
        ScanVerdict::Safe
    }
}

/// Apply the decision and its side effects once both lookups have resolved.
/// The scan counter moves exactly once per invocation regardless of verdict.
pub fn apply_decision(
    scan_id: &str,
    url: &str,
    report: ReputationReport,
    verdict: RiskVerdict,
    store: &DashboardStore,
) -> ScanOutcome {
    store.increment_scans();

    let final_verdict = decide(&report, &verdict);
    let message = match final_verdict {
        ScanVerdict::Warning => {
            store.increment_threats();
            store.add_advisor_message(&verdict.message);
            store.add_alert(NewAlert {
                alert_type: AlertType::Phishing,
                title: ALERT_TITLE.to_string(),
                description: verdict.message.clone(),
                severity: Severity::High,
                time: "Just now".to_string(),
            });
            verdict.message
        }
        ScanVerdict::Safe => {
            store.add_advisor_message(SAFE_MESSAGE);
            SAFE_MESSAGE.to_string()
        }
    };

    ScanOutcome {
        id: scan_id.to_string(),
        url: url.to_string(),
        verdict: final_verdict,
        report,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(is_risky: bool) -> RiskVerdict {
        RiskVerdict { is_risky, message: "classifier says".into() }
    }

    #[test]
    fn test_decision_truth_table() {
        // Warning iff any of (malicious, suspicious, is_risky) is truthy.
        for malicious in [0u64, 2] {
            for suspicious in [0u64, 1] {
                for is_risky in [false, true] {
                    let report = ReputationReport { malicious, suspicious };
                    let expected = if malicious > 0 || suspicious > 0 || is_risky {
                        ScanVerdict::Warning
                    } else {
                        ScanVerdict::Safe
                    };
                    assert_eq!(decide(&report, &verdict(is_risky)), expected);
                }
            }
        }
    }

    #[test]
    fn test_from_config_heuristic_needs_no_keys() {
        let config = CampusGuardConfig {
            classifier: Some(crate::config::ClassifierConfig {
                provider: Some(crate::config::ClassifierKind::Heuristic),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(ScanOrchestrator::from_config(&config).is_ok());
    }

    #[test]
    fn test_only_all_clear_is_safe() {
        let report = ReputationReport::default();
        assert_eq!(decide(&report, &verdict(false)), ScanVerdict::Safe);
    }
}
