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

/// Runtime configuration shared by the CLI and the HTTP server.
///
/// Both API keys are always populated: when the environment does not provide
/// them, obviously invalid placeholders are substituted so that requests fail
/// upstream with an authorization error instead of at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub scraping_api_key: String,
    pub scraping_base_url: String,
    pub generation_api_key: String,
    pub generation_base_url: String,
    pub generation_model: String,
    /// Upper bound on one scraping-proxy request, in seconds.
    pub fetch_timeout_secs: u64,
    /// Upper bound on one chat-completions request, in seconds.
    pub generation_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// True when the scraping key is the built-in placeholder.
    #[must_use]
    pub fn scraping_key_is_placeholder(&self) -> bool {
        self.scraping_api_key == crate::config::SCRAPING_KEY_PLACEHOLDER
    }

    /// True when the generation key is the built-in placeholder.
    #[must_use]
    pub fn generation_key_is_placeholder(&self) -> bool {
        self.generation_api_key == crate::config::GENERATION_KEY_PLACEHOLDER
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("scraping_api_key", &"[redacted]")
            .field("scraping_base_url", &self.scraping_base_url)
            .field("generation_api_key", &"[redacted]")
            .field("generation_base_url", &self.generation_base_url)
            .field("generation_model", &self.generation_model)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("generation_timeout_secs", &self.generation_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
