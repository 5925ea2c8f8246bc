//! Human-readable relative timestamps ("3 hours ago").

use chrono::{DateTime, Utc};

/// Formats how long before `now` the given `date` was.
///
/// Granularity steps from "just now" through minutes, hours, "yesterday",
/// days, weeks (under 30 days), months of 30 days (under 365 days) and years
/// of 365 days. Dates at or after `now` read as "just now".
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use devflow_kit::relative_time;
///
/// let now = Utc.with_ymd_and_hms(2025, 12, 15, 12, 0, 0).unwrap();
/// let date = Utc.with_ymd_and_hms(2025, 12, 14, 12, 0, 0).unwrap();
/// assert_eq!(relative_time(date, now), "yesterday");
/// ```
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(date);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return ago(minutes, "minute");
    }
    if hours < 24 {
        return ago(hours, "hour");
    }
    if days == 1 {
        return "yesterday".to_string();
    }
    if days < 7 {
        return format!("{days} days ago");
    }
    if days < 30 {
        return ago(days / 7, "week");
    }
    if days < 365 {
        return ago(days / 30, "month");
    }
    ago(days / 365, "year")
}

/// [`relative_time`] against the current UTC clock.
pub fn relative_time_from_now(date: DateTime<Utc>) -> String {
    relative_time(date, Utc::now())
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
