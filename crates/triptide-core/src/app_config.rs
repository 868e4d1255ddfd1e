use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the TripTide client side.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend origin, without a trailing slash, e.g. `"http://127.0.0.1:5000"`.
    pub base_url: String,
    pub env: Environment,
    pub log_level: String,
    /// JSON file backing the durable local storage (profile, favorites).
    pub storage_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Extra attempts after the first failure for transient HTTP errors.
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}
