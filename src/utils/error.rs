//! Error types shared by the string parsing helpers.
//!
//! Each variant carries the complete message so call sites that need their
//! own error domain can wrap it with `map_err` without re-formatting.

use thiserror::Error;

/// Failure while parsing a datetime, datetime range or request argument string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("date time {0} format is invalid")]
    InvalidDateTime(String),

    #[error("there is no `,` in date time range {0}")]
    MissingRangeSeparator(String),

    #[error("date time range {0} must contain exactly one `,`")]
    InvalidDateTimeRange(String),

    #[error("there is no `=` in {0}")]
    MissingArgSeparator(String),
}
