use nextdue_rule::RuleError;

pub struct NextDateCase {
    pub name: &'static str,
    pub now: &'static str,
    pub date: &'static str,
    pub repeat: &'static str,
    pub expected: Result<&'static str, ErrorKind>,
}

/// Error kind expected by a case, ignoring the message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyRule,
    InvalidDateFormat,
    InvalidRule,
    UnsupportedRule,
}

impl ErrorKind {
    pub fn of(err: &RuleError) -> Option<Self> {
        match err {
            RuleError::EmptyRule => Some(Self::EmptyRule),
            RuleError::InvalidDateFormat(_) => Some(Self::InvalidDateFormat),
            RuleError::InvalidRule(_) => Some(Self::InvalidRule),
            RuleError::UnsupportedRule(_) => Some(Self::UnsupportedRule),
            RuleError::DateOutOfRange => None,
        }
    }
}

#[expect(clippy::too_many_lines)]
pub fn next_date_cases() -> Vec<NextDateCase> {
    vec![
        NextDateCase {
            name: "leap_february_last_day",
            now: "20240201",
            date: "20240131",
            repeat: "m -1",
            expected: Ok("20240229"),
        },
        NextDateCase {
            name: "four_hundred_days",
            now: "20240101",
            date: "20240115",
            repeat: "d 400",
            expected: Ok("20250218"),
        },
        NextDateCase {
            name: "weekly_monday_wednesday",
            now: "20240103",
            date: "20240101",
            repeat: "w 1,3",
            expected: Ok("20240108"),
        },
        NextDateCase {
            name: "yearly_from_past_anchor",
            now: "20240126",
            date: "16890328",
            repeat: "y",
            expected: Ok("20240328"),
        },
        NextDateCase {
            name: "yearly_anchor_after_now",
            now: "20240126",
            date: "20250701",
            repeat: "y",
            expected: Ok("20260701"),
        },
        NextDateCase {
            name: "yearly_leap_day",
            now: "20240126",
            date: "20240229",
            repeat: "y",
            expected: Ok("20250301"),
        },
        NextDateCase {
            name: "daily_from_today",
            now: "20240126",
            date: "20240126",
            repeat: "d 1",
            expected: Ok("20240127"),
        },
        NextDateCase {
            name: "every_seven_days_past",
            now: "20240126",
            date: "20240113",
            repeat: "d 7",
            expected: Ok("20240127"),
        },
        NextDateCase {
            name: "every_twenty_days_future",
            now: "20240126",
            date: "20240202",
            repeat: "d 20",
            expected: Ok("20240222"),
        },
        NextDateCase {
            name: "weekly_sunday",
            now: "20240126",
            date: "20240125",
            repeat: "w 7",
            expected: Ok("20240128"),
        },
        NextDateCase {
            name: "weekly_several_days",
            now: "20240126",
            date: "20230106",
            repeat: "w 1,4,5",
            expected: Ok("20240129"),
        },
        NextDateCase {
            name: "monthly_fixed_days",
            now: "20240126",
            date: "20231106",
            repeat: "m 13",
            expected: Ok("20240213"),
        },
        NextDateCase {
            name: "monthly_last_and_fixed",
            now: "20240126",
            date: "20240120",
            repeat: "m 25,26,7",
            expected: Ok("20240207"),
        },
        NextDateCase {
            name: "monthly_sentinels",
            now: "20240126",
            date: "20230409",
            repeat: "m -1,18",
            expected: Ok("20240131"),
        },
        NextDateCase {
            name: "monthly_thirty_first_skips_short_months",
            now: "20240126",
            date: "20240201",
            repeat: "m 31",
            expected: Ok("20240331"),
        },
        NextDateCase {
            name: "monthly_second_to_last",
            now: "20240126",
            date: "20240202",
            repeat: "m -2",
            expected: Ok("20240228"),
        },
        NextDateCase {
            name: "empty_rule",
            now: "20240126",
            date: "20240126",
            repeat: "",
            expected: Err(ErrorKind::EmptyRule),
        },
        NextDateCase {
            name: "interval_too_large",
            now: "20240126",
            date: "20240126",
            repeat: "d 401",
            expected: Err(ErrorKind::InvalidRule),
        },
        NextDateCase {
            name: "interval_missing",
            now: "20240126",
            date: "20240126",
            repeat: "d",
            expected: Err(ErrorKind::InvalidRule),
        },
        NextDateCase {
            name: "unknown_kind",
            now: "20240126",
            date: "20240126",
            repeat: "x",
            expected: Err(ErrorKind::UnsupportedRule),
        },
        NextDateCase {
            name: "impossible_month",
            now: "20240126",
            date: "20241301",
            repeat: "d 1",
            expected: Err(ErrorKind::InvalidDateFormat),
        },
        NextDateCase {
            name: "weekday_out_of_range",
            now: "20240126",
            date: "20240126",
            repeat: "w 8,4,5",
            expected: Err(ErrorKind::InvalidRule),
        },
        NextDateCase {
            name: "month_day_out_of_range",
            now: "20240126",
            date: "20240126",
            repeat: "m -3",
            expected: Err(ErrorKind::InvalidRule),
        },
        NextDateCase {
            name: "month_day_too_large",
            now: "20240126",
            date: "20240126",
            repeat: "m 32",
            expected: Err(ErrorKind::InvalidRule),
        },
        NextDateCase {
            name: "yearly_with_argument",
            now: "20240126",
            date: "20240126",
            repeat: "y 2",
            expected: Err(ErrorKind::InvalidRule),
        },
    ]
}
