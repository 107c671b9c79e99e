use chrono::{DateTime, Utc};
use thiserror::Error;

use super::rate_limit::format_reset_time;

/// Failure retrieving a single resource.
///
/// None of these abort a batch: the orchestrator degrades them to a stale
/// cache hit when one exists, or records them in the batch's failed list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("GitHub API rate limit exceeded. Resets at {}", format_reset_time(.reset_at))]
    RateLimited { reset_at: Option<DateTime<Utc>> },

    #[error("HTTP {status}{}", reason_suffix(.reason))]
    Http { status: u16, reason: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Non-standard status codes have no reason phrase
fn reason_suffix(reason: &str) -> String {
    if reason.is_empty() {
        String::new()
    } else {
        format!(": {}", reason)
    }
}

impl FetchError {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        FetchError::Http {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Whether the remote signalled an exhausted quota.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, FetchError::RateLimited { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::InvalidResponse(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_not_found() {
        let err = FetchError::from_status(StatusCode::NOT_FOUND);
        assert_eq!(
            err,
            FetchError::Http {
                status: 404,
                reason: "Not Found".to_string()
            }
        );
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_from_status_server_error() {
        let err = FetchError::from_status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_from_status_without_reason_phrase() {
        let status = StatusCode::from_u16(499).unwrap();
        let err = FetchError::from_status(status);
        assert_eq!(err.to_string(), "HTTP 499");
    }

    #[test]
    fn test_rate_limited_message_names_reset_time() {
        let reset_at = DateTime::from_timestamp(1_700_000_000, 0);
        let err = FetchError::RateLimited { reset_at };
        let message = err.to_string();
        assert!(message.starts_with("GitHub API rate limit exceeded. Resets at "));
        assert!(message.ends_with(&format_reset_time(&reset_at)));
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_rate_limited_without_reset_header() {
        let err = FetchError::RateLimited { reset_at: None };
        assert_eq!(
            err.to_string(),
            "GitHub API rate limit exceeded. Resets at an unknown time"
        );
    }

    #[test]
    fn test_transport_message() {
        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert!(!err.is_rate_limited());
    }
}
