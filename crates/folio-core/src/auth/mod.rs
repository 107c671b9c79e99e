//! Credential handling for GitHub API requests.
//!
//! The API is usable without authentication at a much lower rate limit.
//! When a personal access token is configured it is sent as a bearer
//! credential on every request.

pub mod token;

pub use token::{AuthToken, TokenError};
