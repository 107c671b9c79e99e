//! Data models for featured repositories.
//!
//! This module contains the editable list of featured repository names and
//! a typed view over the opaque repository payloads returned by the API.

pub mod card;
pub mod repo_list;

pub use card::RepoCard;
pub use repo_list::{RepoList, RepoListError};
