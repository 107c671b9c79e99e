//! Turning a batch outcome into what a person should see.
//!
//! The orchestrator only returns data. This module derives the consolidated
//! error text and the best-effort notification a front-end shows for it.

use serde::Serialize;

use super::outcome::{BatchResult, FetchFailure};
use super::owner::OwnerError;

const NOTHING_FOUND_MESSAGE: &str =
    "No repositories were found. Check repository names and GitHub username.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
        }
    }
}

/// Receives user-facing notifications. Delivery is best-effort.
pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Summary of a finished batch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchReport {
    /// Nothing was requested
    Empty,
    /// Every repository loaded
    Loaded { loaded: usize, from_cache: usize },
    /// Some repositories loaded, others failed
    Partial {
        loaded: usize,
        from_cache: usize,
        failures: Vec<FetchFailure>,
    },
    /// No repository loaded
    Failed { failures: Vec<FetchFailure> },
    /// The call was rejected before any repository was tried
    Aborted { reason: String },
}

impl BatchReport {
    pub fn from_outcome(outcome: &Result<BatchResult, OwnerError>) -> Self {
        match outcome {
            Ok(result) => Self::from_result(result),
            Err(err) => BatchReport::Aborted {
                reason: err.to_string(),
            },
        }
    }

    pub fn from_result(result: &BatchResult) -> Self {
        let loaded = result.succeeded.len();
        let from_cache = result.cached_count();
        match (loaded, result.failed.is_empty()) {
            (0, true) => BatchReport::Empty,
            (0, false) => BatchReport::Failed {
                failures: result.failed.clone(),
            },
            (_, true) => BatchReport::Loaded { loaded, from_cache },
            (_, false) => BatchReport::Partial {
                loaded,
                from_cache,
                failures: result.failed.clone(),
            },
        }
    }

    /// Blocking error text, shown in place of the repository list.
    pub fn error_message(&self) -> Option<String> {
        match self {
            BatchReport::Failed { failures } => {
                let mut message = NOTHING_FOUND_MESSAGE.to_string();
                if !failures.is_empty() {
                    message.push_str("\n\nFailed repositories:\n");
                    let lines: Vec<String> = failures
                        .iter()
                        .map(|f| format!("- {}: {}", f.name, f.error))
                        .collect();
                    message.push_str(&lines.join("\n"));
                }
                Some(message)
            }
            BatchReport::Aborted { reason } => {
                Some(format!("Error fetching repositories: {}", reason))
            }
            _ => None,
        }
    }

    /// Non-blocking notification, if the outcome warrants one.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            BatchReport::Partial {
                loaded, failures, ..
            } => Some(Notification::new(
                "Partial Success",
                format!(
                    "{} repositories loaded. {} failed to load.",
                    loaded,
                    failures.len()
                ),
                NotificationKind::Warning,
            )),
            BatchReport::Aborted { reason } => Some(Notification::new(
                "Error",
                reason.clone(),
                NotificationKind::Error,
            )),
            _ => None,
        }
    }

    /// Forward the notification, if any, to `notifier`.
    pub fn notify(&self, notifier: &dyn Notifier) {
        if let Some(notification) = self.notification() {
            notifier.notify(&notification);
        }
    }
}
