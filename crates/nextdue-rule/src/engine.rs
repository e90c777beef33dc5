//! The next-date engine.
//!
//! Every rule kind advances at least one step from the anchor, so the result
//! is always strictly after both the anchor and the reference date. A task
//! whose anchor already lies in the future therefore moves on by one period
//! when it is evaluated.

use chrono::{NaiveDate, NaiveDateTime};

use crate::date::TaskDate;
use crate::error::{RuleError, RuleResult};
use crate::rule::{DayInterval, Rule};

/// ## Summary
/// Computes the first occurrence of `rule` after `reference`, starting from `anchor`.
///
/// Only the calendar date of `reference` takes part in comparisons.
///
/// ## Errors
/// - [`RuleError::EmptyRule`] if `rule` is empty or whitespace
/// - [`RuleError::InvalidDateFormat`] if `anchor` is not a valid `YYYYMMDD` date
/// - [`RuleError::UnsupportedRule`] / [`RuleError::InvalidRule`] if `rule` does not parse
pub fn next_date(reference: NaiveDateTime, anchor: &str, rule: &str) -> RuleResult<TaskDate> {
    if rule.trim().is_empty() {
        return Err(RuleError::EmptyRule);
    }

    let anchor: TaskDate = anchor.parse()?;
    let rule: Rule = rule.parse()?;

    rule.next_after(reference.date(), anchor)
}

impl Rule {
    /// ## Summary
    /// Returns the smallest date strictly after `reference` (and after `anchor`)
    /// reachable from `anchor` by this rule.
    ///
    /// ## Errors
    /// Returns [`RuleError::EmptyRule`] for [`Rule::None`],
    /// [`RuleError::InvalidRule`] for a selector set that can never match, and
    /// [`RuleError::DateOutOfRange`] if the walk runs off the calendar.
    pub fn next_after(&self, reference: NaiveDate, anchor: TaskDate) -> RuleResult<TaskDate> {
        let reference = TaskDate::new(reference);

        let next = match self {
            Self::None => return Err(RuleError::EmptyRule),
            Self::Yearly => step_past(reference, anchor, TaskDate::add_year)?,
            Self::EveryNDays(interval) => every_n_days(reference, anchor, *interval)?,
            Self::MonthlyOnDays(days) => {
                if days.is_empty() {
                    return Err(RuleError::InvalidRule("no days of month selected".to_string()));
                }
                walk_days(reference, anchor, |date| days.iter().any(|day| day.matches(date)))?
            }
            Self::WeeklyOnDays(weekdays) => {
                if weekdays.is_empty() {
                    return Err(RuleError::InvalidRule("no weekdays selected".to_string()));
                }
                walk_days(reference, anchor, |date| weekdays.contains(date.weekday()))?
            }
        };

        tracing::trace!(rule = %self, %anchor, %reference, %next, "Computed next date");
        Ok(next)
    }
}

fn every_n_days(reference: TaskDate, anchor: TaskDate, interval: DayInterval) -> RuleResult<TaskDate> {
    let days = u64::from(interval.get());
    step_past(reference, anchor, |date| date.add_days(days))
}

/// Applies `step` to `anchor` at least once and until the result passes `reference`.
fn step_past(
    reference: TaskDate,
    anchor: TaskDate,
    step: impl Fn(TaskDate) -> RuleResult<TaskDate>,
) -> RuleResult<TaskDate> {
    let mut candidate = step(anchor)?;
    while candidate <= reference {
        candidate = step(candidate)?;
    }
    Ok(candidate)
}

/// Walks forward one day at a time and returns the first day after both
/// `anchor` and `reference` accepted by `matches`.
fn walk_days(
    reference: TaskDate,
    anchor: TaskDate,
    matches: impl Fn(TaskDate) -> bool,
) -> RuleResult<TaskDate> {
    // Days on or before the reference can never be accepted.
    let mut candidate = anchor.max(reference).succ()?;
    while !matches(candidate) {
        candidate = candidate.succ()?;
    }
    Ok(candidate)
}
