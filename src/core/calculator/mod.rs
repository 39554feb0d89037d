pub mod hours;
pub mod summary;
pub mod week;

pub use hours::calculate_hours;
pub use summary::weekly_summary;
pub use week::week_records;
