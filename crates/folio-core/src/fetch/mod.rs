//! Batch retrieval of repository metadata.
//!
//! `FetchService::fetch_all` resolves the owner, then fetches each named
//! repository through the cache. One repository failing never fails the
//! batch: the result records every input name as either succeeded (fresh,
//! cached, or stale) or failed with a reason. Only an unusable owner string
//! aborts the whole call.
//!
//! Items are fetched one at a time by default. Raising
//! `max_concurrent_requests` overlaps the network calls; results are still
//! reported in input order.

pub mod outcome;
pub mod owner;
pub mod report;
pub mod service;

pub use outcome::{BatchResult, FetchFailure, FetchOutcome, ResourceRequest};
pub use owner::{resolve_owner, OwnerError};
pub use report::{BatchReport, Notification, NotificationKind, Notifier};
pub use service::FetchService;
