use serde::Serialize;

/// Aggregate over one week window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    /// Days with both a clock-in and a clock-out.
    pub total_days_worked: usize,
    /// Days with a clock-in, closed or not.
    pub days_with_records: usize,
}
