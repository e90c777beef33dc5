//! Calendar day in the canonical `YYYYMMDD` form.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{RuleError, RuleResult};

/// Format string producing the canonical 8-digit representation.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Last year that still renders as four digits.
pub const MAX_YEAR: i32 = 9999;

/// A calendar day with no time-of-day, always a valid Gregorian date.
///
/// Serializes to and parses from exactly eight ASCII digits (`YYYYMMDD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDate(NaiveDate);

impl TaskDate {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from its components, returning `None` if it does not exist.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Wraps a stepped date, refusing anything past 9999-12-31.
    fn bounded(date: Option<NaiveDate>) -> RuleResult<Self> {
        date.filter(|d| d.year() <= MAX_YEAR)
            .map(Self)
            .ok_or(RuleError::DateOutOfRange)
    }

    /// Returns the following calendar day.
    ///
    /// ## Errors
    /// Returns [`RuleError::DateOutOfRange`] after 9999-12-31.
    pub fn succ(self) -> RuleResult<Self> {
        Self::bounded(self.0.succ_opt())
    }

    /// Returns the date `days` calendar days later.
    ///
    /// ## Errors
    /// Returns [`RuleError::DateOutOfRange`] after 9999-12-31.
    pub fn add_days(self, days: u64) -> RuleResult<Self> {
        Self::bounded(self.0.checked_add_days(Days::new(days)))
    }

    /// Returns the same month and day one year later.
    ///
    /// February 29 rolls over to March 1 when the following year is not a
    /// leap year.
    ///
    /// ## Errors
    /// Returns [`RuleError::DateOutOfRange`] after year 9999.
    pub fn add_year(self) -> RuleResult<Self> {
        let year = self.0.year().checked_add(1).ok_or(RuleError::DateOutOfRange)?;
        Self::bounded(
            NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
                .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1)),
        )
    }

    /// True when the next calendar day is the first of a month.
    #[must_use]
    pub fn is_last_day_of_month(self) -> bool {
        self.0.succ_opt().is_none_or(|next| next.day() == 1)
    }

    /// True when the day after tomorrow is the first of a month.
    #[must_use]
    pub fn is_second_to_last_day_of_month(self) -> bool {
        self.0
            .checked_add_days(Days::new(2))
            .is_some_and(|later| later.day() == 1)
    }
}

impl From<NaiveDate> for TaskDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for TaskDate {
    type Err = RuleError;

    fn from_str(s: &str) -> RuleResult<Self> {
        let invalid = || RuleError::InvalidDateFormat(s.to_string());

        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year = s[0..4].parse::<i32>().map_err(|_e| invalid())?;
        let month = s[4..6].parse::<u32>().map_err(|_e| invalid())?;
        let day = s[6..8].parse::<u32>().map_err(|_e| invalid())?;

        Self::from_ymd(year, month, day).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TaskDate {
    type Error = RuleError;

    fn try_from(value: String) -> RuleResult<Self> {
        value.parse()
    }
}

impl From<TaskDate> for String {
    fn from(value: TaskDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
