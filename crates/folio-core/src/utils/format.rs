use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Format a timestamp as a coarse age: "3d ago", "2w ago", "5mo ago", "1y ago".
/// Partial days round up. Unparseable input is returned unchanged.
pub fn format_relative_date(date: &str, now: DateTime<Utc>) -> String {
    let parsed = match DateTime::parse_from_rfc3339(date) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return date.to_string(),
    };

    let millis = (now - parsed).num_milliseconds().abs();
    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;

    if days < 7 {
        format!("{}d ago", days)
    } else if days < 30 {
        format!("{}w ago", days / 7)
    } else if days < 365 {
        format!("{}mo ago", days / 30)
    } else {
        format!("{}y ago", days / 365)
    }
}

/// Style class for a repository's primary language, or "" when unstyled.
pub fn language_class(language: &str) -> &'static str {
    match language {
        "Java" => "java",
        "Kotlin" => "kotlin",
        "C#" => "dotnet",
        "Vue" => "vue",
        "React" => "react",
        "JavaScript" => "javascript",
        "TypeScript" => "typescript",
        "HTML" => "html",
        "CSS" => "css",
        _ => "",
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-30T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn ago(d: Duration) -> String {
        (now() - d).to_rfc3339()
    }

    #[test]
    fn test_relative_date_days() {
        assert_eq!(format_relative_date(&ago(Duration::days(3)), now()), "3d ago");
        assert_eq!(format_relative_date(&ago(Duration::hours(2)), now()), "1d ago");
        assert_eq!(format_relative_date(&ago(Duration::zero()), now()), "0d ago");
    }

    #[test]
    fn test_relative_date_weeks_months_years() {
        assert_eq!(format_relative_date(&ago(Duration::days(14)), now()), "2w ago");
        assert_eq!(format_relative_date(&ago(Duration::days(90)), now()), "3mo ago");
        assert_eq!(format_relative_date(&ago(Duration::days(800)), now()), "2y ago");
    }

    #[test]
    fn test_relative_date_future_uses_absolute_difference() {
        assert_eq!(format_relative_date(&ago(Duration::days(-3)), now()), "3d ago");
    }

    #[test]
    fn test_relative_date_unparseable() {
        assert_eq!(format_relative_date("yesterday", now()), "yesterday");
    }

    #[test]
    fn test_language_class() {
        assert_eq!(language_class("C#"), "dotnet");
        assert_eq!(language_class("TypeScript"), "typescript");
        assert_eq!(language_class("Rust"), "");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("this is a long string", 10), "this is...");
        assert_eq!(truncate_string("abc", 2), "ab");
    }
}
