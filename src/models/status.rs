use serde::Serialize;

/// Attendance state of a single date. Never carried across days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayStatus {
    NotClockedIn,
    ClockedIn,
    ClockedOut,
}

impl DayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::NotClockedIn => "Not Clocked In",
            DayStatus::ClockedIn => "Clocked In",
            DayStatus::ClockedOut => "Clocked Out",
        }
    }

    pub fn is_clocked_in(&self) -> bool {
        matches!(self, DayStatus::ClockedIn)
    }
}
