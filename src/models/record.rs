use super::{location::LocationReading, status::DayStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar date of clock activity, keyed by `date`.
///
/// Field names follow the persisted layout (`clockInTime`, ...) so stored
/// arrays stay readable by anything else that shares the slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub date: NaiveDate, // "YYYY-MM-DD"
    pub clock_in_time: Option<String>,  // "hh:mm:ss AM|PM"
    pub clock_out_time: Option<String>, // "hh:mm:ss AM|PM"
    #[serde(default)]
    pub clock_in_location: Option<LocationReading>,
    #[serde(default)]
    pub clock_out_location: Option<LocationReading>,
}

impl AttendanceRecord {
    /// Fresh record created by a first clock-in on `date`.
    pub fn clocked_in(date: NaiveDate, time: String, location: Option<LocationReading>) -> Self {
        Self {
            date,
            clock_in_time: Some(time),
            clock_out_time: None,
            clock_in_location: location,
            clock_out_location: None,
        }
    }

    /// Empty stand-in for a date with nothing stored.
    pub fn placeholder(date: NaiveDate) -> Self {
        Self {
            date,
            clock_in_time: None,
            clock_out_time: None,
            clock_in_location: None,
            clock_out_location: None,
        }
    }

    pub fn status(&self) -> DayStatus {
        match (&self.clock_in_time, &self.clock_out_time) {
            (None, _) => DayStatus::NotClockedIn,
            (Some(_), None) => DayStatus::ClockedIn,
            (Some(_), Some(_)) => DayStatus::ClockedOut,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.clock_in_time.is_some() && self.clock_out_time.is_some()
    }

    pub fn has_clock_in(&self) -> bool {
        self.clock_in_time.is_some()
    }

    /// Timesheet badge text.
    pub fn badge(&self) -> &'static str {
        if self.is_complete() {
            "Complete"
        } else if self.has_clock_in() {
            "In Progress"
        } else {
            "No Record"
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
