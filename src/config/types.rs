use serde::{Deserialize, Serialize};

pub const DEFAULT_DB_PATH: &str = "./campusguard.db";
pub const DEFAULT_CACHE_DIR: &str = "./cache";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8787;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CampusGuardConfig {
    pub reputation: Option<ReputationConfig>,
    pub classifier: Option<ClassifierConfig>,
    pub storage: Option<StorageConfig>,
    pub server: Option<ServerConfig>,
}

impl CampusGuardConfig {
    /// Precedence for each setting: CLI flag, then config file, then the
    /// built-in default.
    pub fn db_path(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.storage.as_ref().and_then(|s| s.db_path.clone()))
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
    }

    pub fn cache_dir(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.storage.as_ref().and_then(|s| s.cache_dir.clone()))
            .unwrap_or_else(|| DEFAULT_CACHE_DIR.to_string())
    }

    pub fn host(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.server.as_ref().and_then(|s| s.host.clone()))
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    pub fn port(&self, flag: Option<u16>) -> u16 {
        flag.or_else(|| self.server.as_ref().and_then(|s| s.port))
            .unwrap_or(DEFAULT_PORT)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReputationConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    /// Seconds to wait between submitting a URL and fetching its analysis.
    pub analysis_delay_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ClassifierConfig {
    pub provider: Option<ClassifierKind>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    #[default]
    Gemini,
    Heuristic,
}

impl ClassifierKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" => Some(Self::Gemini),
            "heuristic" => Some(Self::Heuristic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Heuristic => "heuristic",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StorageConfig {
    pub db_path: Option<String>,
    pub cache_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}
