//! Recurrence rules for reminders and the next-date engine that evaluates them.
//!
//! A rule is written in a small mini-language:
//!
//! | Rule | Meaning |
//! |---|---|
//! | `y` | every year on the anchor's month and day |
//! | `d <n>` | every `n` days, `1 <= n <= 400` |
//! | `w <d1,d2,...>` | on the listed ISO weekdays (1 = Monday … 7 = Sunday) |
//! | `m <d1,d2,...>` | on the listed days of month, `-1` = last, `-2` = second-to-last |
//!
//! [`next_date`] parses all three inputs and returns the first occurrence
//! strictly after the reference date. It is a pure function and safe to call
//! from any number of threads.

pub mod date;
pub mod engine;
pub mod error;
pub mod rule;

pub use date::TaskDate;
pub use engine::next_date;
pub use error::{RuleError, RuleResult};
pub use rule::{DayInterval, DayOfMonth, MonthDay, Rule, Weekdays};
