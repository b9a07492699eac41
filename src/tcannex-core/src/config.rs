use serde::{Deserialize, Serialize};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "TCANNEX_API_KEY";

/// Production CPRT endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.tcannex.com";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Fill a missing API key from `TCANNEX_API_KEY`.
    ///
    /// This is the only place the environment is consulted.
    pub fn with_env(mut self) -> Self {
        self.api_key = resolve_api_key(self.api_key.as_deref(), std::env::var(API_KEY_ENV).ok());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Base URL without trailing slashes
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Pick the credential: an explicit non-empty key wins over the environment.
pub fn resolve_api_key(explicit: Option<&str>, env: Option<String>) -> Option<String> {
    match explicit {
        Some(key) if !key.is_empty() => Some(key.to_string()),
        _ => env.filter(|key| !key.is_empty()),
    }
}
