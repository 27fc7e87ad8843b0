use std::time::Duration;

/// Per-request timeout applied uniformly across operations.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable naming the deployment target.
pub const ENV_BASE_URL: &str = "JARGON_API_URL";

/// Environment variable overriding the request timeout, in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "JARGON_API_TIMEOUT_MS";

/// Client configuration, fixed at construction.
///
/// The base URL is always injected by the deployment (flag, config file,
/// or environment); there is no built-in service address.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("jargon/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Configuration from `JARGON_API_URL` (and optionally
    /// `JARGON_API_TIMEOUT_MS`). `None` when the URL is not set.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(ENV_BASE_URL).ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        let mut config = Self::new(base_url.trim());
        if let Some(ms) = std::env::var(ENV_TIMEOUT_MS)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.timeout = Duration::from_millis(ms);
        }
        Some(config)
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("http://localhost:8000//");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.endpoint("/health"), "http://localhost:8000/health");
    }

    #[test]
    fn defaults() {
        let config = ApiConfig::new("http://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("jargon/"));
    }

    #[test]
    fn from_env_reads_url_and_timeout() {
        std::env::set_var(ENV_BASE_URL, "http://env.example.com/");
        std::env::set_var(ENV_TIMEOUT_MS, "1500");

        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://env.example.com");
        assert_eq!(config.timeout, Duration::from_millis(1500));

        std::env::remove_var(ENV_BASE_URL);
        std::env::remove_var(ENV_TIMEOUT_MS);
    }

    #[test]
    fn builder_overrides() {
        let config = ApiConfig::new("http://api.example.com")
            .with_timeout(Duration::from_millis(250))
            .with_user_agent("jargon-test");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.user_agent, "jargon-test");
    }
}
