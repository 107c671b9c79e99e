//! REST client module for the GitHub API.
//!
//! This module provides the `GithubClient` used to retrieve repository
//! metadata, the `FetchError` taxonomy for per-item failures, and
//! interpretation of the `X-RateLimit-*` response headers.
//!
//! Requests are unauthenticated unless an `AuthToken` is supplied, in which
//! case it is sent as a bearer credential.

pub mod client;
pub mod error;
pub mod rate_limit;

pub use client::{GithubClient, DEFAULT_API_BASE_URL};
pub use error::FetchError;
pub use rate_limit::RateLimit;
