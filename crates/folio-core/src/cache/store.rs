use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tracing::info;

/// Entries are fresh for 5 minutes.
/// Keeps well under GitHub's unauthenticated quota of 60 requests per hour.
pub const DEFAULT_TTL_SECS: i64 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub payload: Value,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            fetched_at: Utc::now(),
        }
    }

    pub fn age(&self) -> Duration {
        Utc::now() - self.fetched_at
    }
}

/// Thread-safe TTL cache keyed by request URL.
///
/// Reads return entries regardless of age; callers decide with `is_fresh`.
/// Entries are only ever replaced wholesale by `put` or dropped by `clear`.
#[derive(Debug)]
pub struct CacheStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl CacheStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    pub fn is_fresh(&self, entry: &CacheEntry) -> bool {
        entry.age() < self.ttl
    }

    /// Store `payload` under `key`, stamped with the current time.
    pub fn put(&self, key: &str, payload: Value) {
        self.insert(key, CacheEntry::new(payload));
    }

    fn insert(&self, key: &str, entry: CacheEntry) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), entry);
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
        info!("GitHub cache cleared");
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_TTL_SECS))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_missing_key() {
        let store = CacheStore::default();
        assert!(store.get("https://api.github.com/repos/a/b").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_then_get_is_fresh() {
        let store = CacheStore::default();
        store.put("k", json!({"name": "b"}));

        let entry = store.get("k").unwrap();
        assert_eq!(entry.payload, json!({"name": "b"}));
        assert!(store.is_fresh(&entry));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_replaces_existing_entry() {
        let store = CacheStore::default();
        store.put("k", json!({"stars": 1}));
        store.put("k", json!({"stars": 2}));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("k").unwrap().payload, json!({"stars": 2}));
    }

    #[test]
    fn test_expired_entry_is_still_returned() {
        let store = CacheStore::default();
        let mut old = CacheEntry::new(json!({"name": "old"}));
        old.fetched_at = Utc::now() - Duration::minutes(6);
        store.insert("k", old);

        let entry = store.get("k").unwrap();
        assert_eq!(entry.payload, json!({"name": "old"}));
        assert!(!store.is_fresh(&entry));
    }

    #[test]
    fn test_is_fresh_boundary() {
        let store = CacheStore::new(Duration::minutes(5));

        let mut inside = CacheEntry::new(json!(null));
        inside.fetched_at = Utc::now() - Duration::minutes(4);
        assert!(store.is_fresh(&inside));

        let mut outside = CacheEntry::new(json!(null));
        outside.fetched_at = Utc::now() - Duration::minutes(5) - Duration::seconds(1);
        assert!(!store.is_fresh(&outside));
    }

    #[test]
    fn test_zero_ttl_is_never_fresh() {
        let store = CacheStore::new(Duration::zero());
        store.put("k", json!(1));
        let entry = store.get("k").unwrap();
        assert!(!store.is_fresh(&entry));
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = CacheStore::default();
        store.put("a", json!(1));
        store.put("b", json!(2));
        store.clear();

        assert!(store.is_empty());
        assert!(store.get("a").is_none());
        assert!(store.get("b").is_none());
    }

    #[test]
    fn test_default_ttl() {
        assert_eq!(CacheStore::default().ttl(), Duration::minutes(5));
    }
}
