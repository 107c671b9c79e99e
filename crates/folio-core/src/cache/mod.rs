//! In-memory caching of API responses.
//!
//! This module provides the `CacheStore`, a map from fully resolved request
//! URL to the last successfully retrieved payload. Entries are considered
//! fresh for a fixed TTL (5 minutes by default) but are kept after expiry so
//! a failed refetch can fall back to them.
//!
//! Nothing is persisted; the store lives for the lifetime of the process.

pub mod store;

pub use store::{CacheEntry, CacheStore, DEFAULT_TTL_SECS};
