use serde::Deserialize;

use crate::fetch::FetchOutcome;

/// Display fields picked out of a GitHub repository payload.
///
/// The cached payload stays opaque; this is only a read-side projection,
/// so every field besides `name` is optional or defaulted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepoCard {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(skip)]
    pub cached: bool,
    #[serde(skip)]
    pub stale: bool,
}

impl RepoCard {
    pub fn from_outcome(outcome: &FetchOutcome) -> Result<Self, serde_json::Error> {
        let mut card = RepoCard::deserialize(&outcome.payload)?;
        card.cached = outcome.from_cache;
        card.stale = outcome.stale;
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome(payload: serde_json::Value) -> FetchOutcome {
        FetchOutcome {
            name: "WebSLT".to_string(),
            payload,
            from_cache: true,
            stale: true,
        }
    }

    #[test]
    fn test_from_full_payload() {
        let card = RepoCard::from_outcome(&outcome(json!({
            "name": "WebSLT",
            "description": "Sign language translator",
            "html_url": "https://github.com/alice/WebSLT",
            "language": "TypeScript",
            "stargazers_count": 12,
            "forks_count": 3,
            "updated_at": "2024-05-01T10:00:00Z",
            "private": false
        })))
        .unwrap();

        assert_eq!(card.name, "WebSLT");
        assert_eq!(card.language.as_deref(), Some("TypeScript"));
        assert_eq!(card.stargazers_count, 12);
        assert_eq!(card.forks_count, 3);
        assert!(card.cached);
        assert!(card.stale);
    }

    #[test]
    fn test_null_fields_are_tolerated() {
        let card = RepoCard::from_outcome(&outcome(json!({
            "name": "dots",
            "description": null,
            "language": null
        })))
        .unwrap();

        assert!(card.description.is_none());
        assert!(card.language.is_none());
        assert_eq!(card.stargazers_count, 0);
    }

    #[test]
    fn test_missing_name_is_an_error() {
        assert!(RepoCard::from_outcome(&outcome(json!({"message": "Not Found"}))).is_err());
    }
}
