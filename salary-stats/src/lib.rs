pub mod hh;
pub mod salary;
pub mod superjob;

mod stats;
mod types;

pub use types::{Error, LanguageSummary, Result};

/// Per-language summaries in the order the languages were queried.
pub type LanguageStatistics = Vec<(String, LanguageSummary)>;
