use crate::models::{AttendanceRecord, WeeklySummary};

pub fn weekly_summary(week: &[AttendanceRecord]) -> WeeklySummary {
    WeeklySummary {
        total_days_worked: week.iter().filter(|r| r.is_complete()).count(),
        days_with_records: week.iter().filter(|r| r.has_clock_in()).count(),
    }
}
