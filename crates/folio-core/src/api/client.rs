//! API client for retrieving repository metadata from GitHub.
//!
//! The client performs single GET requests and classifies the outcome into
//! a JSON payload or a `FetchError`. Caching and batch handling live in
//! `crate::fetch`.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde_json::Value;
use tracing::debug;

use crate::auth::AuthToken;

use super::{FetchError, RateLimit};

// ============================================================================
// Constants
// ============================================================================

/// Base URL for the public GitHub REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Media type pinning the v3 REST representation
const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";

/// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// API client for GitHub.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
}

impl GithubClient {
    /// Create a client for the public GitHub API with the transport's default timeout
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_BASE_URL, None)
    }

    /// Create a client against a custom API root (GitHub Enterprise, test servers).
    pub fn with_base_url(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fully resolved URL for a repository; also used as its cache key.
    pub fn repo_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}", self.base_url, owner, repo)
    }

    fn request_headers(token: Option<&AuthToken>) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(GITHUB_V3_ACCEPT),
        );
        if let Some(token) = token {
            headers.insert(header::AUTHORIZATION, token.bearer_header().clone());
        }
        headers
    }

    /// GET `url` and return the body as opaque JSON.
    ///
    /// Rate-limit headers are checked before the status code, so an
    /// exhausted quota is reported as `RateLimited` even when GitHub answers
    /// with 403.
    pub async fn get_json(&self, url: &str, token: Option<&AuthToken>) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .headers(Self::request_headers(token))
            .send()
            .await?;

        let rate_limit = RateLimit::from_headers(response.headers());
        if let Some(remaining) = rate_limit.remaining {
            debug!(url = url, remaining = remaining, "GitHub API rate limit");
        }
        rate_limit.check()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_url() {
        let client = GithubClient::new().unwrap();
        assert_eq!(
            client.repo_url("alice", "WebSLT"),
            "https://api.github.com/repos/alice/WebSLT"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = GithubClient::with_base_url("http://localhost:8080/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.repo_url("bob", "dots"),
            "http://localhost:8080/repos/bob/dots"
        );
    }

    #[test]
    fn test_request_headers_without_token() {
        let headers = GithubClient::request_headers(None);
        assert_eq!(headers.get(header::ACCEPT).unwrap(), GITHUB_V3_ACCEPT);
        assert!(headers.get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_headers_with_token() {
        let token = AuthToken::new("ghp_abc").unwrap();
        let headers = GithubClient::request_headers(Some(&token));
        assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), "Bearer ghp_abc");
    }
}
