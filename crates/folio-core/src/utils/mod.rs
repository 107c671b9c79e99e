//! Display helpers shared by front-ends.

pub mod format;

pub use format::{format_relative_date, language_class, truncate_string};
