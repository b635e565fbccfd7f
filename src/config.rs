use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Mealie server root, without trailing slash
    pub base_url: String,
    /// Long-lived API token; takes precedence over username/password
    pub api_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Default timeout for every request that does not set its own
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            username: None,
            password: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = non_empty("MEALIE_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        config.api_token = non_empty("MEALIE_API_TOKEN");
        config.username = non_empty("MEALIE_USERNAME");
        config.password = non_empty("MEALIE_PASSWORD");

        if let Some(secs) = non_empty("MEALIE_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(e) => tracing::warn!("Ignoring invalid MEALIE_TIMEOUT_SECS '{}': {}", secs, e),
            }
        }

        config
    }

    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => Some((u.clone(), p.clone())),
            _ => None,
        }
    }
}
