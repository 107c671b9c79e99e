//! Plain-text rendering of a batch result.

use chrono::{DateTime, Utc};
use folio_core::fetch::{FetchOutcome, Notification, NotificationKind, Notifier};
use folio_core::models::RepoCard;
use folio_core::utils::{format_relative_date, language_class, truncate_string};
use folio_core::BatchResult;

/// Descriptions longer than this are cut with an ellipsis
const MAX_DESCRIPTION_LENGTH: usize = 72;

/// Prints notifications to stderr so they never mix with JSON output.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notification: &Notification) {
        let label = match notification.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        };
        eprintln!("[{}] {}: {}", label, notification.title, notification.message);
    }
}

/// ANSI color for a language style class
fn language_color(class: &str) -> Option<&'static str> {
    match class {
        "java" | "html" => Some("31"),
        "vue" => Some("32"),
        "javascript" => Some("33"),
        "dotnet" | "typescript" => Some("34"),
        "kotlin" | "css" => Some("35"),
        "react" => Some("36"),
        _ => None,
    }
}

fn render_language(language: &str, color: bool) -> String {
    match language_color(language_class(language)) {
        Some(code) if color => format!("\x1b[{}m{}\x1b[0m", code, language),
        _ => language.to_string(),
    }
}

pub fn render_result(result: &BatchResult, now: DateTime<Utc>, color: bool) -> String {
    result
        .succeeded
        .iter()
        .map(|outcome| render_outcome(outcome, now, color))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One-line tally, e.g. "3 repositories loaded (2 cached, 1 stale)"
pub fn render_summary(result: &BatchResult) -> String {
    let mut summary = format!("{} repositories loaded", result.succeeded.len());
    let cached = result.cached_count();
    if cached > 0 {
        summary.push_str(&format!(" ({} cached, {} stale)", cached, result.stale_count()));
    }
    summary
}

fn render_outcome(outcome: &FetchOutcome, now: DateTime<Utc>, color: bool) -> String {
    match RepoCard::from_outcome(outcome) {
        Ok(card) => render_card(&card, now, color),
        Err(_) => format!("{}\n  (unrecognized repository data)", outcome.name),
    }
}

pub fn render_card(card: &RepoCard, now: DateTime<Utc>, color: bool) -> String {
    let mut title = card.name.clone();
    if card.stale {
        title.push_str("  [stale]");
    } else if card.cached {
        title.push_str("  [cached]");
    }

    let mut lines = vec![title];
    if let Some(description) = card.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("  {}", truncate_string(description, MAX_DESCRIPTION_LENGTH)));
    }

    let mut meta = vec![
        format!("stars {}", card.stargazers_count),
        format!("forks {}", card.forks_count),
    ];
    if let Some(language) = &card.language {
        meta.push(render_language(language, color));
    }
    if let Some(updated) = &card.updated_at {
        meta.push(format!("updated {}", format_relative_date(updated, now)));
    }
    lines.push(format!("  {}", meta.join("  ")));

    if let Some(url) = &card.html_url {
        lines.push(format!("  {}", url));
    }
    lines.join("\n")
}
