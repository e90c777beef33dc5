//! Parser for the rule mini-language.
//!
//! Tokens are separated by whitespace. The first token selects the rule kind
//! and is case-sensitive; list arguments are comma-separated with no spaces.

use std::collections::BTreeSet;
use std::str::FromStr;

use super::{DayInterval, DayOfMonth, MonthDay, Rule, Weekdays};
use crate::error::{RuleError, RuleResult};

impl FromStr for Rule {
    type Err = RuleError;

    /// Parses rule text. Empty or whitespace-only text yields [`Rule::None`].
    ///
    /// ## Errors
    /// Returns [`RuleError::UnsupportedRule`] for an unknown leading token and
    /// [`RuleError::InvalidRule`] for malformed or out-of-range arguments.
    fn from_str(s: &str) -> RuleResult<Self> {
        let mut tokens = s.split_whitespace();

        let Some(kind) = tokens.next() else {
            return Ok(Self::None);
        };

        let rule = match kind {
            "y" => Self::Yearly,
            "d" => Self::EveryNDays(parse_interval(single_argument(kind, &mut tokens)?)?),
            "w" => Self::WeeklyOnDays(parse_weekdays(single_argument(kind, &mut tokens)?)?),
            "m" => Self::MonthlyOnDays(parse_month_days(single_argument(kind, &mut tokens)?)?),
            other => return Err(RuleError::UnsupportedRule(other.to_string())),
        };

        if let Some(extra) = tokens.next() {
            return Err(RuleError::InvalidRule(format!(
                "unexpected token {extra:?} after rule '{kind}'"
            )));
        }

        tracing::trace!(rule = %rule, "Parsed repetition rule");
        Ok(rule)
    }
}

fn single_argument<'a>(kind: &str, tokens: &mut impl Iterator<Item = &'a str>) -> RuleResult<&'a str> {
    tokens
        .next()
        .ok_or_else(|| RuleError::InvalidRule(format!("rule '{kind}' requires an argument")))
}

fn parse_interval(value: &str) -> RuleResult<DayInterval> {
    let days = value
        .parse::<u16>()
        .map_err(|e| RuleError::InvalidRule(format!("day interval {value:?}: {e}")))?;
    DayInterval::new(days)
}

fn parse_weekdays(list: &str) -> RuleResult<Weekdays> {
    let mut weekdays = Weekdays::empty();
    for item in split_list(list)? {
        let iso = item
            .parse::<u8>()
            .map_err(|e| RuleError::InvalidRule(format!("weekday {item:?}: {e}")))?;
        weekdays.insert_iso(iso)?;
    }
    Ok(weekdays)
}

fn parse_month_days(list: &str) -> RuleResult<BTreeSet<MonthDay>> {
    split_list(list)?.map(parse_month_day).collect()
}

fn parse_month_day(item: &str) -> RuleResult<MonthDay> {
    let value = item
        .parse::<i8>()
        .map_err(|e| RuleError::InvalidRule(format!("day of month {item:?}: {e}")))?;

    match value {
        -1 => Ok(MonthDay::Last),
        -2 => Ok(MonthDay::SecondToLast),
        day => u8::try_from(day)
            .map_err(|_e| {
                RuleError::InvalidRule(format!("day of month {day} must be 1..=31, -1 or -2"))
            })
            .and_then(DayOfMonth::new)
            .map(MonthDay::Day),
    }
}

/// Splits a comma list, rejecting empty items such as in `1,,2` or `1,`.
fn split_list(list: &str) -> RuleResult<impl Iterator<Item = &str>> {
    if list.split(',').any(str::is_empty) {
        return Err(RuleError::InvalidRule(format!("malformed list {list:?}")));
    }
    Ok(list.split(','))
}
