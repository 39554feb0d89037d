pub mod location;
pub mod record;
pub mod status;
pub mod summary;

pub use location::LocationReading;
pub use record::AttendanceRecord;
pub use status::DayStatus;
pub use summary::WeeklySummary;
