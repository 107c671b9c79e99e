//! Folio core library.
//!
//! Fetches live metadata for a portfolio's featured GitHub repositories,
//! caching responses in memory with a TTL and falling back to stale data
//! when a refetch fails.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod fetch;
pub mod models;
pub mod utils;

pub use api::{FetchError, GithubClient};
pub use auth::{AuthToken, TokenError};
pub use cache::CacheStore;
pub use config::Config;
pub use fetch::{BatchReport, BatchResult, FetchFailure, FetchOutcome, FetchService, OwnerError};
