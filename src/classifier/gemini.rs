use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::CampusGuardError;
use crate::reputation::ReputationReport;
use super::provider::RiskClassifier;
use super::types::RiskVerdict;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClassifier {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClassifier {
    pub fn new(api_key: &str, model: Option<&str>, base_url: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.unwrap_or("gemini-2.5-flash").to_string(),
            base_url: base_url.unwrap_or(DEFAULT_BASE_URL).to_string(),
        }
    }

    fn build_prompt(url: &str, report: &ReputationReport) -> String {
        format!(
            "URL: {}. Reputation stats: {{\"malicious\": {}, \"suspicious\": {}}}.\n\
             Analyze if this link is a phishing scam. Check for 'wp-admin' or 'repair' patterns.\n\
             Reply ONLY in this JSON format: {{\"isRisky\": boolean, \"message\": \"short user-facing warning\"}}",
            url, report.malicious, report.suspicious
        )
    }
}

#[async_trait]
impl RiskClassifier for GeminiClassifier {
    async fn classify(
        &self,
        url: &str,
        report: &ReputationReport,
    ) -> Result<RiskVerdict, CampusGuardError> {
        let body = json!({
            "contents": [{
                "parts": [{"text": Self::build_prompt(url, report)}]
            }]
        });

        let endpoint = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let resp = self.client.post(&endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| CampusGuardError::Network(format!("Gemini request failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(CampusGuardError::ClassifierApi(
                format!("Gemini call failed: HTTP {}", resp.status())
            ));
        }

        let data: Value = resp.json().await
            .map_err(|e| CampusGuardError::ClassifierApi(format!("Parse error: {}", e)))?;

        if let Some(error) = data.get("error") {
            return Err(CampusGuardError::ClassifierApi(
                error["message"].as_str().unwrap_or("Unknown").to_string()
            ));
        }

        let text = data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| CampusGuardError::ClassifierApi("No text in Gemini response".into()))?;

        parse_verdict(text)
    }

    fn provider_name(&self) -> &str { "gemini" }
}

/// Parse a verdict from raw model output, tolerating markdown code fences
/// and surrounding chatter.
pub(crate) fn parse_verdict(text: &str) -> Result<RiskVerdict, CampusGuardError> {
    // Try direct parse first
    if let Ok(v) = serde_json::from_str::<RiskVerdict>(text) { return Ok(v); }

    // Strip markdown code fences if present
    let trimmed = text.trim();
    let stripped = trimmed
        .strip_prefix("```json").or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed);
    if let Ok(v) = serde_json::from_str::<RiskVerdict>(stripped.trim()) { return Ok(v); }

    // Extract the JSON object from the response text
    if let (Some(start), Some(end)) = (stripped.find('{'), stripped.rfind('}')) {
        if start < end {
            if let Ok(v) = serde_json::from_str::<RiskVerdict>(&stripped[start..=end]) {
                return Ok(v);
            }
        }
    }

    Err(CampusGuardError::ClassifierApi("No valid verdict JSON in Gemini response".into()))
}
