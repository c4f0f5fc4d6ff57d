use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampusGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Classifier API error: {0}")]
    ClassifierApi(String),

    #[error("Reputation API error: {0}")]
    ReputationApi(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Unknown quest: {0}")]
    UnknownQuest(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
