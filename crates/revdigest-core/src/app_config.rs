use std::net::SocketAddr;

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

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    /// When set, model discovery is skipped and this model is used as-is.
    pub gemini_model: Option<String>,
    pub store_base_url: String,
    pub review_language: String,
    pub review_target: usize,
    pub min_votes: u32,
    pub top_n: usize,
    pub request_timeout_secs: u64,
    pub fetch_max_retries: u32,
    pub fetch_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("gemini_api_key", &"[redacted]")
            .field("gemini_base_url", &self.gemini_base_url)
            .field("gemini_model", &self.gemini_model)
            .field("store_base_url", &self.store_base_url)
            .field("review_language", &self.review_language)
            .field("review_target", &self.review_target)
            .field("min_votes", &self.min_votes)
            .field("top_n", &self.top_n)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("fetch_max_retries", &self.fetch_max_retries)
            .field("fetch_backoff_base_ms", &self.fetch_backoff_base_ms)
            .finish()
    }
}
