use crate::utils::time::clock_minutes;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Worked time between two stored clock strings, as "8h 30m".
///
/// Returns "-" when either side is missing or malformed. An out-time
/// earlier than the in-time is read as an overnight shift. Seconds are
/// dropped, so the result can be off by up to a minute.
pub fn calculate_hours(clock_in: Option<&str>, clock_out: Option<&str>) -> String {
    let (Some(clock_in), Some(clock_out)) = (clock_in, clock_out) else {
        return "-".to_string();
    };

    let (in_minutes, mut out_minutes) = match (clock_minutes(clock_in), clock_minutes(clock_out)) {
        (Ok(i), Ok(o)) => (i, o),
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!(error = %e, "cannot compute hours");
            return "-".to_string();
        }
    };

    if out_minutes < in_minutes {
        out_minutes += MINUTES_PER_DAY;
    }

    let diff = out_minutes - in_minutes;
    format!("{}h {}m", diff / 60, diff % 60)
}
