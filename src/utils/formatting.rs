//! Formatting utilities used for CLI output.

use crate::models::LocationReading;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// "Sunday, October 18, 2026"
pub fn long_date(d: NaiveDate) -> String {
    d.format("%A, %B %-d, %Y").to_string()
}

/// "Sun, Oct 18"
pub fn short_date(d: NaiveDate) -> String {
    d.format("%a, %b %-d").to_string()
}

/// Header clock, same shape as stored times.
pub fn clock_display(now: NaiveDateTime) -> String {
    crate::utils::time::format_clock_time(now.time())
}

/// " at 45.4642, 9.1900" or " (location unavailable)".
pub fn location_suffix(location: Option<&LocationReading>) -> String {
    match location {
        Some(l) => format!(" at {}", l.short()),
        None => " (location unavailable)".to_string(),
    }
}

/// Location line for status output, with accuracy when known.
pub fn describe_location(location: Option<&LocationReading>) -> String {
    match location {
        Some(l) => match l.accuracy {
            Some(acc) => format!("{} (±{:.0} m)", l.short(), acc),
            None => l.short(),
        },
        None => "--".to_string(),
    }
}

pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("--")
}

static ANSI_ESCAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

/// Remove ANSI colour sequences, for width computations.
pub fn strip_ansi(s: &str) -> String {
    match ANSI_ESCAPE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Printable width of a possibly coloured string.
pub fn visible_len(s: &str) -> usize {
    strip_ansi(s).chars().count()
}
