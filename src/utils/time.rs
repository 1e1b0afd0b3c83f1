use chrono::{DateTime, Utc};

const MILLIS_PER_MINUTE: i64 = 60 * 1000;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Renders a non-negative elapsed duration in milliseconds as the display
/// string shown next to each comment: whole days once at least a day has
/// passed, otherwise hours and minutes, otherwise minutes alone (which may
/// be "0 minutes ago").
pub fn format_elapsed(millis: i64) -> String {
    let days = millis / MILLIS_PER_DAY;
    let hours = (millis % MILLIS_PER_DAY) / MILLIS_PER_HOUR;
    let minutes = (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;

    if days > 0 {
        format!("{} days ago", days)
    } else if hours > 0 {
        format!("{} hours, {} minutes ago", hours, minutes)
    } else {
        format!("{} minutes ago", minutes)
    }
}

/// Elapsed-time string for a comment posted at `timestamp`. Clock skew can
/// make `now` land before the timestamp; that clamps to zero.
pub fn elapsed_since(timestamp: DateTime<Utc>) -> String {
    let millis = (Utc::now() - timestamp).num_milliseconds();
    format_elapsed(millis.max(0))
}
