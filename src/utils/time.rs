//! Datetime and time-interval parsing helpers.
//!
//! Datetimes use the fixed `YYYY-MM-DD HH:MM:SS` layout with no timezone.
//! Intervals are space separated tokens such as `1w 2d -3h 30m 15s`.

use super::error::ParseError;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// `strftime` pattern used for both parsing and formatting.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static DATETIME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("valid datetime regex")
});

static INTERVAL_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?\d+)(w|d|h|m|s)").expect("valid interval regex"));

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// A pair of optional bounds. `None` means unbounded on that side.
pub type DateTimeRange = (Option<NaiveDateTime>, Option<NaiveDateTime>);

/// Parse a `YYYY-MM-DD HH:MM:SS` string.
///
/// The layout is strict: every field is zero padded, and no leading or
/// trailing whitespace or timezone suffix is accepted.
///
/// # Examples
///
/// ```
/// use compass_utils::utils::time::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2014-06-01 12:30:00").unwrap();
/// assert_eq!(dt.year(), 2014);
/// assert!(parse_datetime("2014-6-1 12:30:00").is_err());
/// ```
pub fn parse_datetime(text: &str) -> Result<NaiveDateTime, ParseError> {
    if !DATETIME_SHAPE.is_match(text) {
        tracing::warn!(input = text, "datetime does not match {}", DATETIME_FORMAT);
        return Err(ParseError::InvalidDateTime(text.to_string()));
    }

    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT).map_err(|e| {
        tracing::warn!(input = text, error = %e, "failed to parse datetime");
        ParseError::InvalidDateTime(text.to_string())
    })
}

/// Parse `start,end` into a pair of optional datetimes.
///
/// Either side may be empty to leave that bound open. Exactly one `,` is
/// required.
pub fn parse_datetime_range(text: &str) -> Result<DateTimeRange, ParseError> {
    let (start, end) = match text.split_once(',') {
        Some(parts) => parts,
        None => {
            tracing::warn!(input = text, "datetime range has no separator");
            return Err(ParseError::MissingRangeSeparator(text.to_string()));
        }
    };

    if end.contains(',') {
        tracing::warn!(input = text, "datetime range has more than one separator");
        return Err(ParseError::InvalidDateTimeRange(text.to_string()));
    }

    let start = if start.is_empty() {
        None
    } else {
        Some(parse_datetime(start)?)
    };
    let end = if end.is_empty() {
        None
    } else {
        Some(parse_datetime(end)?)
    };

    Ok((start, end))
}

/// Format a datetime with [`DATETIME_FORMAT`].
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Convert an interval string such as `"1d 2h"` into total seconds.
///
/// Each whitespace separated token must start with a signed integer followed
/// by one of `w`, `d`, `h`, `m`, `s`; anything after the unit letter is
/// ignored. Tokens that do not match are skipped. Repeated units add up.
///
/// # Examples
///
/// ```
/// use compass_utils::utils::time::parse_time_interval;
///
/// assert_eq!(parse_time_interval("1d 2h"), 93600.0);
/// assert_eq!(parse_time_interval("-1d"), -86400.0);
/// assert_eq!(parse_time_interval("5x"), 0.0);
/// ```
pub fn parse_time_interval(text: &str) -> f64 {
    let mut total: i64 = 0;

    for token in text.split_whitespace() {
        let caps = match INTERVAL_TOKEN.captures(token) {
            Some(caps) => caps,
            None => {
                tracing::trace!(token, "skipping unrecognized interval token");
                continue;
            }
        };

        let value: i64 = match caps[1].parse() {
            Ok(v) => v,
            Err(_) => {
                tracing::debug!(token, "interval value out of range, skipping");
                continue;
            }
        };

        let unit = match &caps[2] {
            "w" => SECONDS_PER_WEEK,
            "d" => SECONDS_PER_DAY,
            "h" => SECONDS_PER_HOUR,
            "m" => SECONDS_PER_MINUTE,
            _ => 1,
        };

        total = total.saturating_add(value.saturating_mul(unit));
    }

    total as f64
}

/// Same as [`parse_time_interval`], with a missing value meaning zero.
pub fn parse_time_interval_opt(text: Option<&str>) -> f64 {
    text.map(parse_time_interval).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2014-03-05 07:08:09").unwrap();
        assert_eq!(dt.year(), 2014);
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.day(), 5);
        assert_eq!(dt.hour(), 7);
        assert_eq!(dt.minute(), 8);
        assert_eq!(dt.second(), 9);
    }

    #[test]
    fn test_parse_datetime_rejects_loose_layouts() {
        for bad in [
            "not-a-date",
            "",
            "2014-03-05",
            "2014-03-05T07:08:09",
            " 2014-03-05 07:08:09",
            "2014-03-05 07:08:09 ",
            "2014-3-5 7:8:9",
            "2014-03-05 07:08:09Z",
            "2014-13-05 07:08:09",
            "2014-02-30 07:08:09",
        ] {
            assert_eq!(
                parse_datetime(bad),
                Err(ParseError::InvalidDateTime(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_format_round_trip() {
        for s in ["2000-01-01 00:00:00", "2024-02-29 23:59:59", "1999-12-31 12:00:00"] {
            assert_eq!(format_datetime(&parse_datetime(s).unwrap()), s);
        }
    }

    #[test]
    fn test_parse_datetime_range() {
        let (start, end) = parse_datetime_range("2020-01-01 00:00:00,").unwrap();
        assert_eq!(start, Some(parse_datetime("2020-01-01 00:00:00").unwrap()));
        assert_eq!(end, None);

        let (start, end) = parse_datetime_range(",2020-01-01 00:00:00").unwrap();
        assert_eq!(start, None);
        assert!(end.is_some());

        assert_eq!(parse_datetime_range(",").unwrap(), (None, None));
    }

    #[test]
    fn test_parse_datetime_range_errors() {
        assert!(matches!(
            parse_datetime_range("no-comma"),
            Err(ParseError::MissingRangeSeparator(_))
        ));
        assert!(matches!(
            parse_datetime_range("a,b,c"),
            Err(ParseError::InvalidDateTimeRange(_))
        ));
        assert!(matches!(
            parse_datetime_range("bad,"),
            Err(ParseError::InvalidDateTime(s)) if s == "bad"
        ));
    }

    #[test]
    fn test_parse_time_interval() {
        assert_eq!(parse_time_interval("1d 2h"), 93600.0);
        assert_eq!(parse_time_interval("-1d"), -86400.0);
        assert_eq!(parse_time_interval(""), 0.0);
        assert_eq!(parse_time_interval("5x"), 0.0);
        assert_eq!(parse_time_interval("1w"), 604800.0);
        assert_eq!(parse_time_interval("+30m 15s"), 1815.0);
    }

    #[test]
    fn test_parse_time_interval_accumulates_and_ignores_suffix() {
        assert_eq!(parse_time_interval("1h 1h"), 7200.0);
        assert_eq!(parse_time_interval("2days"), 172800.0);
        assert_eq!(parse_time_interval("  1m   x  -1s "), 59.0);
        assert_eq!(parse_time_interval("99999999999999999999999d 1s"), 1.0);
    }

    #[test]
    fn test_parse_time_interval_opt() {
        assert_eq!(parse_time_interval_opt(None), 0.0);
        assert_eq!(parse_time_interval_opt(Some("1m")), 60.0);
    }
}
