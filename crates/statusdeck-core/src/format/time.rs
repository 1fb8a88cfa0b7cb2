//! Relative-time labels for timestamps.

use chrono::{DateTime, Utc};

/// Bucket the time elapsed since `timestamp` into a short label.
///
/// - missing or unparseable timestamp: `"Never"`
/// - under a minute (or in the future): `"Just now"`
/// - under an hour: `"{m}m ago"`
/// - otherwise: `"{h}h ago"`, with no upper bound
///
/// Minutes and hours are floored.
pub fn relative_time(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = timestamp else {
        return "Never".to_string();
    };

    let Ok(then) = DateTime::parse_from_rfc3339(raw) else {
        return "Never".to_string();
    };

    relative_time_between(then.with_timezone(&Utc), now)
}

/// [`relative_time`] against the current clock.
pub fn relative_time_from_now(timestamp: Option<&str>) -> String {
    relative_time(timestamp, Utc::now())
}

pub fn relative_time_between(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();
    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }

    format!("{}h ago", minutes / 60)
}
