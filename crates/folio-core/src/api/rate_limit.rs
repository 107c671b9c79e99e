//! Interpretation of GitHub's rate-limit response headers.

use chrono::{DateTime, Local, Utc};
use reqwest::header::HeaderMap;

use super::FetchError;

pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// Quota signals attached to an API response.
///
/// Either header may be missing (e.g. from a proxy or a non-GitHub host), in
/// which case the corresponding field is `None` and no limit is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateLimit {
    pub remaining: Option<u64>,
    pub reset_at: Option<DateTime<Utc>>,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header_str = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
        };

        let remaining = header_str(REMAINING_HEADER).and_then(|v| v.parse::<u64>().ok());
        let reset_at = header_str(RESET_HEADER)
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0));

        Self {
            remaining,
            reset_at,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Fail with `RateLimited` when the quota is exhausted.
    pub fn check(&self) -> Result<(), FetchError> {
        if self.is_exhausted() {
            Err(FetchError::RateLimited {
                reset_at: self.reset_at,
            })
        } else {
            Ok(())
        }
    }
}

/// Human-readable reset time, shown in the local timezone.
pub fn format_reset_time(reset_at: &Option<DateTime<Utc>>) -> String {
    match reset_at {
        Some(at) => at.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => "an unknown time".to_string(),
    }
}
