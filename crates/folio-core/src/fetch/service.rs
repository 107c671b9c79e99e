//! Batch fetch orchestration over the GitHub client and the cache.

use std::sync::Arc;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::api::GithubClient;
use crate::auth::AuthToken;
use crate::cache::CacheStore;
use crate::config::Config;
use crate::models::RepoList;

use super::outcome::{BatchResult, FetchFailure, FetchOutcome, ResourceRequest};
use super::owner::{resolve_owner, OwnerError};

/// Default number of in-flight requests per batch.
/// One request at a time keeps the reference sequential ordering.
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 1;

/// Fetches featured repositories through a shared `CacheStore`.
///
/// The service holds no UI state: each call returns a `BatchResult` value
/// and the caller decides how to present it.
#[derive(Debug, Clone)]
pub struct FetchService {
    client: GithubClient,
    cache: Arc<CacheStore>,
    max_concurrent: usize,
}

impl FetchService {
    pub fn new(client: GithubClient, cache: Arc<CacheStore>) -> Self {
        Self {
            client,
            cache,
            max_concurrent: DEFAULT_MAX_CONCURRENT_REQUESTS,
        }
    }

    /// Build a service, client and cache from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = GithubClient::with_base_url(&config.api_base_url, config.request_timeout())?;
        let cache = Arc::new(CacheStore::new(config.cache_ttl()));
        Ok(Self::new(client, cache).with_max_concurrent(config.max_concurrent_requests))
    }

    /// Allow up to `n` requests in flight at once (minimum 1).
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n.max(1);
        self
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Fetch every repository in `names` for `owner`.
    ///
    /// A missing or blank owner, or an empty list, yields an empty batch
    /// without touching the network. Per-repository failures are recorded in
    /// the result; only an owner that cannot be resolved fails the call.
    pub async fn fetch_all(
        &self,
        owner: Option<&str>,
        names: &[String],
        token: Option<&AuthToken>,
    ) -> Result<BatchResult, OwnerError> {
        let owner = match owner {
            Some(o) if !o.trim().is_empty() => o,
            _ => return Ok(BatchResult::default()),
        };
        if names.is_empty() {
            return Ok(BatchResult::default());
        }

        let owner = resolve_owner(owner)?;
        let requests: Vec<ResourceRequest> = names
            .iter()
            .map(|name| ResourceRequest {
                owner: owner.clone(),
                resource_name: name.clone(),
                auth_token: token.cloned(),
            })
            .collect();

        // `buffered` yields in input order regardless of completion order
        let items: Vec<_> = stream::iter(requests.iter())
            .map(|request| self.fetch_one(request))
            .buffered(self.max_concurrent)
            .collect()
            .await;

        let mut result = BatchResult::default();
        for item in items {
            result.push(item);
        }

        info!(
            owner = %owner,
            loaded = result.succeeded.len(),
            failed = result.failed.len(),
            "{}/{} repositories loaded from cache",
            result.cached_count(),
            result.succeeded.len()
        );
        Ok(result)
    }

    /// Drop every cached entry, then run a fresh batch.
    pub async fn retry(
        &self,
        owner: Option<&str>,
        names: &[String],
        token: Option<&AuthToken>,
    ) -> Result<BatchResult, OwnerError> {
        self.clear_cache();
        self.fetch_all(owner, names, token).await
    }

    /// Adopt an edited repository list.
    ///
    /// Clears the cache so the next batch re-validates every repository,
    /// and returns the names to pass to `fetch_all`.
    pub fn commit_repo_list(&self, list: RepoList) -> Vec<String> {
        self.clear_cache();
        list.into_names()
    }

    async fn fetch_one(&self, request: &ResourceRequest) -> Result<FetchOutcome, FetchFailure> {
        let name = &request.resource_name;
        let url = self.client.repo_url(&request.owner, name);

        if let Some(entry) = self.cache.get(&url) {
            if self.cache.is_fresh(&entry) {
                debug!(url = %url, "Using cached data");
                return Ok(FetchOutcome {
                    name: name.clone(),
                    payload: entry.payload,
                    from_cache: true,
                    stale: false,
                });
            }
        }

        match self.client.get_json(&url, request.auth_token.as_ref()).await {
            Ok(payload) => {
                self.cache.put(&url, payload.clone());
                Ok(FetchOutcome {
                    name: name.clone(),
                    payload,
                    from_cache: false,
                    stale: false,
                })
            }
            Err(err) => match self.cache.get(&url) {
                Some(entry) => {
                    warn!(repo = %name, error = %err, "Using stale cache due to error");
                    Ok(FetchOutcome {
                        name: name.clone(),
                        payload: entry.payload,
                        from_cache: true,
                        stale: true,
                    })
                }
                None => {
                    warn!(repo = %name, error = %err, "Error fetching repository");
                    Err(FetchFailure {
                        name: name.clone(),
                        error: err.to_string(),
                    })
                }
            },
        }
    }
}
