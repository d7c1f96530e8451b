//! Datetime and datetime range parsing.
//!
//! # Usage
//!
//! ```bash
//! compass-util parse-datetime "2014-06-01 12:00:00"
//! compass-util parse-range "2014-06-01 00:00:00,"
//! ```
//!
//! Valid input is echoed back in canonical form; an unbounded side of a
//! range prints as `-`.

use crate::utils::time::{format_datetime, parse_datetime, parse_datetime_range};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;

pub fn run_parse(text: &str) -> Result<()> {
    let dt = parse_datetime(text).context("Invalid datetime")?;
    println!("{}", format_datetime(&dt));
    Ok(())
}

pub fn run_range(text: &str) -> Result<()> {
    let (start, end) = parse_datetime_range(text).context("Invalid datetime range")?;
    println!("start: {}", bound(start.as_ref()));
    println!("end:   {}", bound(end.as_ref()));
    Ok(())
}

fn bound(dt: Option<&NaiveDateTime>) -> String {
    dt.map(format_datetime).unwrap_or_else(|| "-".to_string())
}
