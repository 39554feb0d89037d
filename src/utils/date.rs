use chrono::{Datelike, Days, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Sunday on or before `d`, if representable.
pub fn week_start(d: NaiveDate) -> Option<NaiveDate> {
    let offset = d.weekday().num_days_from_sunday() as u64;
    d.checked_sub_days(Days::new(offset))
}

/// The Sunday→Saturday window containing `d`.
///
/// `None` near the ends of the calendar, where the full week would fall
/// outside the representable range.
pub fn week_dates(d: NaiveDate) -> Option<Vec<NaiveDate>> {
    let start = week_start(d)?;
    start.checked_add_days(Days::new(6))?;
    Some(start.iter_days().take(7).collect())
}
