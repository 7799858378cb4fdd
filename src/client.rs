// Advent of Code HTTP client.
// Downloads puzzle inputs over authenticated GET and serves them from the local cache.

use std::path::PathBuf;

use reqwest::{
    Client, StatusCode,
    header::{COOKIE, USER_AGENT},
};

use crate::cache::{InputLines, paths, store};
use crate::config::Config;
use crate::error::{Error, Result};

/// Client for fetching and caching puzzle inputs.
///
/// A cache hit is simply an existing file at the key's path; no freshness
/// metadata is kept, and entries persist until overwritten by a forced
/// refresh.
pub struct AocClient {
    http: Client,
    config: Config,
}

impl AocClient {
    /// Create a client with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Create a client with credentials from `AOC_SESSION` / `AOC_USERAGENT`.
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    /// The client's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Cache file path for a key: `<cache-root>/<year>/<day>.txt`.
    pub fn cache_path(&self, year: u32, day: u32) -> PathBuf {
        paths::input_path(&self.config.cache_dir, year, day)
    }

    /// Download one day's input into the cache with the configured credentials.
    pub async fn download(&self, year: u32, day: u32) -> Result<()> {
        self.download_with(year, day, None, None).await
    }

    /// Download with per-call credential overrides.
    ///
    /// `None` falls back to the configured defaults; an absent default sends
    /// an empty header value. A non-200 response returns an error without
    /// creating or touching the cache entry.
    pub async fn download_with(
        &self,
        year: u32,
        day: u32,
        session: Option<&str>,
        user_agent: Option<&str>,
    ) -> Result<()> {
        let url = format!("{}/{}/day/{}/input", self.config.base_url, year, day);
        let session = session.or(self.config.session.as_deref()).unwrap_or("");
        let user_agent = user_agent.or(self.config.user_agent.as_deref()).unwrap_or("");

        let response = self
            .http
            .get(&url)
            .header(COOKIE, format!("session={session}"))
            .header(USER_AGENT, user_agent)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => return Err(Error::Unauthorized),
            StatusCode::NOT_FOUND => return Err(Error::NotFound(url)),
            status => return Err(Error::Status(status)),
        }

        let body = response.bytes().await?;
        let path = self.cache_path(year, day);
        if !body.is_ascii() {
            return Err(Error::Encoding { path });
        }

        // Validated ASCII above, so the lossy conversion is exact.
        store::write_text(&path, &String::from_utf8_lossy(&body))
    }

    /// Lines of one day's input, downloading into the cache on a miss.
    ///
    /// With `force` set, the entry is re-downloaded and overwritten even if
    /// it already exists. Download failures propagate and leave any existing
    /// entry as it was.
    pub async fn input(&self, year: u32, day: u32, force: bool) -> Result<InputLines> {
        self.input_with(year, day, None, force).await
    }

    /// Like [`input`](AocClient::input) with a per-call session override.
    pub async fn input_with(
        &self,
        year: u32,
        day: u32,
        session: Option<&str>,
        force: bool,
    ) -> Result<InputLines> {
        let path = self.cache_path(year, day);
        if force || !store::exists(&path) {
            self.download_with(year, day, session, None).await?;
        }
        InputLines::open(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_path_uses_configured_root() {
        let client = AocClient::new(Config::default().with_cache_dir("/tmp/aoc"));
        assert_eq!(
            client.cache_path(2023, 5),
            PathBuf::from("/tmp/aoc/2023/5.txt")
        );
    }
}
