//! Interpretation of the free-form search string.

use chrono::NaiveDate;
use nextdue_rule::TaskDate;

/// Format accepted for searching by date, e.g. `26.01.2024`.
pub const SEARCH_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// No filter.
    All,
    /// Tasks due on this day.
    Date(TaskDate),
    /// Case-insensitive substring of title or comment.
    Text(String),
}

impl SearchQuery {
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            return Self::All;
        }

        match NaiveDate::parse_from_str(query, SEARCH_DATE_FORMAT) {
            Ok(date) => Self::Date(TaskDate::new(date)),
            Err(_e) => Self::Text(query.to_string()),
        }
    }
}
