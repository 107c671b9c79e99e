use serde::Serialize;
use serde_json::Value;

use crate::auth::AuthToken;

/// One repository to retrieve within a batch.
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    pub owner: String,
    pub resource_name: String,
    pub auth_token: Option<AuthToken>,
}

/// A repository whose metadata is available, fresh or from cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct FetchOutcome {
    pub name: String,
    pub payload: Value,
    pub from_cache: bool,
    /// Served from an expired entry after a failed refetch
    pub stale: bool,
}

/// A repository that could not be retrieved and had no cached fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct FetchFailure {
    pub name: String,
    pub error: String,
}

/// Result of one batch.
///
/// Every requested name appears exactly once across `succeeded` and
/// `failed`, each list in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct BatchResult {
    pub succeeded: Vec<FetchOutcome>,
    pub failed: Vec<FetchFailure>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cached_count(&self) -> usize {
        self.succeeded.iter().filter(|o| o.from_cache).count()
    }

    pub fn stale_count(&self) -> usize {
        self.succeeded.iter().filter(|o| o.stale).count()
    }

    pub(crate) fn push(&mut self, item: Result<FetchOutcome, FetchFailure>) {
        match item {
            Ok(outcome) => self.succeeded.push(outcome),
            Err(failure) => self.failed.push(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome(name: &str, from_cache: bool, stale: bool) -> FetchOutcome {
        FetchOutcome {
            name: name.to_string(),
            payload: json!({ "name": name }),
            from_cache,
            stale,
        }
    }

    #[test]
    fn test_push_partitions_in_order() {
        let mut result = BatchResult::default();
        result.push(Ok(outcome("A", false, false)));
        result.push(Err(FetchFailure {
            name: "B".to_string(),
            error: "HTTP 404: Not Found".to_string(),
        }));
        result.push(Ok(outcome("C", true, true)));

        let names: Vec<_> = result.succeeded.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(result.failed[0].name, "B");
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_counts() {
        let result = BatchResult {
            succeeded: vec![
                outcome("A", false, false),
                outcome("B", true, false),
                outcome("C", true, true),
            ],
            failed: vec![],
        };
        assert_eq!(result.cached_count(), 2);
        assert_eq!(result.stale_count(), 1);
        assert!(!result.is_empty());
        assert!(BatchResult::default().is_empty());
    }

    #[test]
    fn test_serializes_camel_case_flags() {
        let value = serde_json::to_value(outcome("A", true, false)).unwrap();
        assert_eq!(value["fromCache"], json!(true));
        assert_eq!(value["stale"], json!(false));
        assert_eq!(value["payload"]["name"], json!("A"));
    }
}
