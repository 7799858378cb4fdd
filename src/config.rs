// Client configuration.
// Resolves default credentials from the environment; call sites may override per request.

use std::env;
use std::path::PathBuf;

/// Environment variable holding the default session cookie value.
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Environment variable holding the default User-Agent string.
pub const USER_AGENT_ENV: &str = "AOC_USERAGENT";

/// Directory the cache lives under, relative to the working directory.
pub const CACHE_DIR: &str = ".aoccache";

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Settings for an [`AocClient`](crate::AocClient).
///
/// Credentials resolved here are process-wide defaults; the download
/// operations accept per-call overrides that take precedence.
#[derive(Debug, Clone)]
pub struct Config {
    /// Session cookie value, sent as `Cookie: session=<value>`.
    pub session: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// Root directory for cached inputs.
    pub cache_dir: PathBuf,
    /// Endpoint base URL. Overridable for tests.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session: None,
            user_agent: None,
            cache_dir: PathBuf::from(CACHE_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Build a config with credentials taken from `AOC_SESSION` and
    /// `AOC_USERAGENT`. Unset variables leave the field empty; downloads
    /// then send empty header values.
    pub fn from_env() -> Self {
        Self {
            session: env::var(SESSION_ENV).ok(),
            user_agent: env::var(USER_AGENT_ENV).ok(),
            ..Self::default()
        }
    }

    /// Replace the cache root directory.
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Replace the endpoint base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cache_dir, PathBuf::from(".aoccache"));
        assert_eq!(config.base_url, "https://adventofcode.com");
        assert!(config.session.is_none());
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_cache_dir("/tmp/cache")
            .with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/cache"));
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
