//! Recurrence rule value types.
//!
//! Rules are parsed once from their textual form (see [`parse`]) and then
//! evaluated by the engine. Every payload type validates its range on
//! construction, so a `Rule` value can always be evaluated without looping
//! forever.

pub mod parse;

use std::collections::BTreeSet;
use std::fmt;

use chrono::Weekday;

use crate::date::TaskDate;
use crate::error::{RuleError, RuleResult};

/// Largest accepted interval for `d` rules.
pub const MAX_DAY_INTERVAL: u16 = 400;

/// A parsed repetition rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Rule {
    /// No repetition. Parsed from an empty rule string.
    #[default]
    None,
    /// Every year on the anchor's month and day.
    Yearly,
    /// Every `n` days.
    EveryNDays(DayInterval),
    /// On the selected days of each month.
    MonthlyOnDays(BTreeSet<MonthDay>),
    /// On the selected ISO weekdays.
    WeeklyOnDays(Weekdays),
}

impl Rule {
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Day interval of a `d` rule, always in `1..=400`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayInterval(u16);

impl DayInterval {
    /// ## Errors
    /// Returns [`RuleError::InvalidRule`] if `days` is outside `1..=400`.
    pub fn new(days: u16) -> RuleResult<Self> {
        if (1..=MAX_DAY_INTERVAL).contains(&days) {
            Ok(Self(days))
        } else {
            Err(RuleError::InvalidRule(format!(
                "day interval {days} must be between 1 and {MAX_DAY_INTERVAL}"
            )))
        }
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

/// Fixed day-of-month number, always in `1..=31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    /// ## Errors
    /// Returns [`RuleError::InvalidRule`] if `day` is outside `1..=31`.
    pub fn new(day: u8) -> RuleResult<Self> {
        if (1..=31).contains(&day) {
            Ok(Self(day))
        } else {
            Err(RuleError::InvalidRule(format!(
                "day of month {day} must be between 1 and 31"
            )))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Day-of-month selector of an `m` rule.
///
/// Ordering puts fixed days first (ascending), then the sentinels, which is
/// also the order used when a rule is rendered back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MonthDay {
    Day(DayOfMonth),
    /// `-1`
    Last,
    /// `-2`
    SecondToLast,
}

impl MonthDay {
    /// True when `date` is selected by this day-of-month selector.
    #[must_use]
    pub fn matches(self, date: TaskDate) -> bool {
        match self {
            Self::Day(day) => date.day() == u32::from(day.get()),
            Self::Last => date.is_last_day_of_month(),
            Self::SecondToLast => date.is_second_to_last_day_of_month(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(day) => write!(f, "{}", day.get()),
            Self::Last => f.write_str("-1"),
            Self::SecondToLast => f.write_str("-2"),
        }
    }
}

/// Set of ISO weekdays, stored as a bitmask with Monday in the lowest bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Weekdays(u8);

impl Weekdays {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Adds a weekday given by ISO number (1 = Monday … 7 = Sunday).
    ///
    /// ## Errors
    /// Returns [`RuleError::InvalidRule`] if `iso` is outside `1..=7`.
    pub fn insert_iso(&mut self, iso: u8) -> RuleResult<()> {
        if !(1..=7).contains(&iso) {
            return Err(RuleError::InvalidRule(format!(
                "weekday {iso} must be between 1 and 7"
            )));
        }
        self.0 |= 1 << (iso - 1);
        Ok(())
    }

    #[must_use]
    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.num_days_from_monday()) != 0
    }

    /// ISO numbers of the selected weekdays, ascending.
    pub fn iso_numbers(self) -> impl Iterator<Item = u8> {
        (1..=7u8).filter(move |iso| self.0 & (1 << (iso - 1)) != 0)
    }
}

impl fmt::Display for Weekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iso_numbers())
    }
}

fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            f.write_str(",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Renders the canonical rule text, which parses back to an equal rule.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Yearly => f.write_str("y"),
            Self::EveryNDays(interval) => write!(f, "d {}", interval.get()),
            Self::MonthlyOnDays(days) => {
                f.write_str("m ")?;
                write_list(f, days)
            }
            Self::WeeklyOnDays(weekdays) => write!(f, "w {weekdays}"),
        }
    }
}
