//! Time utilities: 12-hour clock strings and minutes-since-midnight parsing.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime};

/// Stored format of clock events: "02:15:30 PM".
pub const CLOCK_FORMAT: &str = "%I:%M:%S %p";

pub fn format_clock_time(t: NaiveTime) -> String {
    t.format(CLOCK_FORMAT).to_string()
}

/// Minutes since midnight of a stored time string.
///
/// Accepts `HH:MM`, `HH:MM:SS`, optionally followed by an `AM`/`PM` marker.
/// Only hour and minute count; seconds are checked for shape and dropped.
pub fn clock_minutes(s: &str) -> AppResult<i64> {
    let malformed = || AppError::MalformedTimeString(s.to_string());

    let trimmed = s.trim();
    let (clock, meridiem) = match trimmed.rsplit_once(' ') {
        Some((c, m)) => (c.trim(), Some(m.to_ascii_uppercase())),
        None => (trimmed, None),
    };

    let mut parts = clock.split(':');
    let hour = parts
        .next()
        .and_then(|h| h.parse::<i64>().ok())
        .ok_or_else(malformed)?;
    let minute = parts
        .next()
        .and_then(|m| m.parse::<i64>().ok())
        .ok_or_else(malformed)?;
    if let Some(sec) = parts.next()
        && !matches!(sec.parse::<i64>(), Ok(0..=59))
    {
        return Err(malformed());
    }
    if parts.next().is_some() || !(0..60).contains(&minute) {
        return Err(malformed());
    }

    let hour = match meridiem.as_deref() {
        None if (0..24).contains(&hour) => hour,
        Some("AM") if (1..=12).contains(&hour) => hour % 12,
        Some("PM") if (1..=12).contains(&hour) => hour % 12 + 12,
        _ => return Err(malformed()),
    };

    Ok(hour * 60 + minute)
}

/// Parse the hidden `--at` override: `YYYY-MM-DDTHH:MM[:SS]`.
pub fn parse_instant(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}
