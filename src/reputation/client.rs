use std::time::Duration;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use crate::errors::CampusGuardError;

const DEFAULT_BASE_URL: &str = "https://www.virustotal.com/api/v3";
const DEFAULT_ANALYSIS_DELAY_SECS: u64 = 5;

/// Coarse verdict counts from the reputation service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationReport {
    pub malicious: u64,
    pub suspicious: u64,
}

impl ReputationReport {
    pub fn is_flagged(&self) -> bool {
        self.malicious > 0 || self.suspicious > 0
    }
}

pub struct ReputationClient {
    client: Client,
    base_url: String,
    api_key: String,
    analysis_delay: Duration,
}

impl ReputationClient {
    pub fn new(api_key: &str, base_url: Option<&str>, analysis_delay: Option<Duration>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.unwrap_or(DEFAULT_BASE_URL).to_string(),
            api_key: api_key.to_string(),
            analysis_delay: analysis_delay
                .unwrap_or(Duration::from_secs(DEFAULT_ANALYSIS_DELAY_SECS)),
        }
    }

    /// Submit a URL for analysis and fetch the resulting verdict counts.
    ///
    /// Never fails: any transport or parse error degrades to a zero report,
    /// so a failed lookup is indistinguishable from a verified-clean one.
    pub async fn lookup(&self, url: &str) -> ReputationReport {
        match self.try_lookup(url).await {
            Ok(report) => {
                debug!(malicious = report.malicious, suspicious = report.suspicious, "Reputation report");
                report
            }
            Err(e) => {
                warn!(error = %e, "Reputation lookup failed, degrading to zero report");
                ReputationReport::default()
            }
        }
    }

    async fn try_lookup(&self, url: &str) -> Result<ReputationReport, CampusGuardError> {
        let resp = self.client
            .post(format!("{}/urls", self.base_url))
            .header("x-apikey", &self.api_key)
            .form(&[("url", url)])
            .send()
            .await
            .map_err(|e| CampusGuardError::Network(format!("URL submission failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(CampusGuardError::ReputationApi(
                format!("Submission rejected: HTTP {}", resp.status())
            ));
        }

        let data: Value = resp.json().await
            .map_err(|e| CampusGuardError::ReputationApi(format!("Submission parse error: {}", e)))?;
        let analysis_id = data["data"]["id"].as_str()
            .ok_or_else(|| CampusGuardError::ReputationApi("No analysis id in submission response".into()))?
            .to_string();

        // The analysis endpoint needs a moment before results are ready
        tokio::time::sleep(self.analysis_delay).await;

        let resp = self.client
            .get(format!("{}/analyses/{}", self.base_url, analysis_id))
            .header("x-apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| CampusGuardError::Network(format!("Analysis fetch failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(CampusGuardError::ReputationApi(
                format!("Analysis fetch rejected: HTTP {}", resp.status())
            ));
        }

        let data: Value = resp.json().await
            .map_err(|e| CampusGuardError::ReputationApi(format!("Analysis parse error: {}", e)))?;
        let stats = &data["data"]["attributes"]["stats"];

        Ok(ReputationReport {
            malicious: stats["malicious"].as_u64().unwrap_or(0),
            suspicious: stats["suspicious"].as_u64().unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_degrades_to_zero_report_on_failure() {
        // Unroutable endpoint: submission fails at the transport level
        let client = ReputationClient::new(
            "test-key",
            Some("http://127.0.0.1:9/api/v3"),
            Some(Duration::ZERO),
        );
        let report = client.lookup("http://example.com").await;
        assert_eq!(report, ReputationReport::default());
    }

    #[test]
    fn test_zero_report_not_flagged() {
        assert!(!ReputationReport::default().is_flagged());
        assert!(ReputationReport { malicious: 1, suspicious: 0 }.is_flagged());
        assert!(ReputationReport { malicious: 0, suspicious: 3 }.is_flagged());
    }
}
