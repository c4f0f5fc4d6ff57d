use serde::Deserialize;

#[derive(Deserialize)]
pub struct ScanRequest {
    pub url: String,
}

#[derive(Deserialize)]
pub struct AdvisorRequest {
    pub message: String,
}
