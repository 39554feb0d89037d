pub mod attendance;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod location;
pub mod log;

pub use attendance::{AttendanceService, ClockAction, ClockOutcome};
