use thiserror::Error;

/// Validation failures reported by the rule parser and the next-date engine.
///
/// Every variant describes bad caller input; none of them are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule text was empty, meaning no repetition was requested.
    #[error("no repetition rule given")]
    EmptyRule,

    #[error("invalid date format: {0:?} (expected YYYYMMDD)")]
    InvalidDateFormat(String),

    /// The rule kind is known but its arguments are malformed or out of range.
    #[error("invalid rule: {0}")]
    InvalidRule(String),

    /// The leading token does not name a rule kind.
    #[error("unsupported rule: {0:?}")]
    UnsupportedRule(String),

    #[error("date out of range")]
    DateOutOfRange,
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
