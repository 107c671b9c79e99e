//! Application configuration management.
//!
//! This module loads the profile settings that drive a batch: the GitHub
//! profile URL or account name, the featured repository names and an
//! optional access token, plus cache and transport tuning.
//!
//! Configuration is read from `~/.config/folio/config.json` unless a path is
//! given. Keys use the same camelCase names as the site's profile JSON, so a
//! profile file can be used directly. `GITHUB_TOKEN` in the environment
//! overrides the configured token.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::DEFAULT_API_BASE_URL;
use crate::auth::AuthToken;
use crate::cache::DEFAULT_TTL_SECS;
use crate::fetch::service::DEFAULT_MAX_CONCURRENT_REQUESTS;

/// Application name used for the config directory path
const APP_NAME: &str = "folio";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the configured token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Profile URL (`https://github.com/alice`) or bare account name
    pub github: Option<String>,
    pub featured_repos: Vec<String>,
    pub github_token: Option<String>,
    pub cache_ttl_secs: i64,
    pub api_base_url: String,
    pub max_concurrent_requests: usize,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github: None,
            featured_repos: Vec::new(),
            github_token: None,
            cache_ttl_secs: DEFAULT_TTL_SECS,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            debug!(path = %path.display(), "Loaded config");
            Ok(config)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_token_override(std::env::var(TOKEN_ENV_VAR).ok());
    }

    fn apply_token_override(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.github_token = Some(token);
        }
    }

    /// The configured token, if any. An unusable token is a configuration
    /// error rather than something to retry per request.
    pub fn auth_token(&self) -> Result<Option<AuthToken>> {
        AuthToken::from_optional(self.github_token.as_deref())
            .context("Invalid githubToken in configuration")
    }

    /// Negative values clamp to zero, values beyond chrono's range to the maximum.
    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::try_seconds(self.cache_ttl_secs.max(0)).unwrap_or(chrono::Duration::MAX)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
