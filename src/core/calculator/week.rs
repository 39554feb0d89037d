use crate::models::AttendanceRecord;
use crate::utils::date::week_dates;
use chrono::NaiveDate;

/// Sunday→Saturday view of the week containing `reference`.
///
/// Always seven entries; dates without a stored record get a placeholder.
/// `None` when that week does not fit in the calendar range.
pub fn week_records(
    all: &[AttendanceRecord],
    reference: NaiveDate,
) -> Option<Vec<AttendanceRecord>> {
    let records = week_dates(reference)?
        .into_iter()
        .map(|date| {
            all.iter()
                .find(|r| r.date == date)
                .cloned()
                .unwrap_or_else(|| AttendanceRecord::placeholder(date))
        })
        .collect();
    Some(records)
}
