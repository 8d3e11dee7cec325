//! Millisecond timestamps
//!
//! ClickUp encodes dates as Unix epoch milliseconds, usually inside JSON
//! strings (`"1567780450202"`).

use chrono::{DateTime, TimeZone, Utc};
use std::time::Duration;

/// Parse an epoch-milliseconds string.
pub fn parse_millis(value: &str) -> Option<DateTime<Utc>> {
    let millis = value.trim().parse::<i64>().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}

/// Epoch milliseconds for `time`, as the API expects in request bodies and queries.
pub fn to_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Render an epoch-milliseconds string as `YYYY-MM-DD HH:MM` (UTC), or return
/// the input unchanged when it is not a timestamp.
pub fn format_millis(value: &str) -> String {
    parse_millis(value)
        .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Render a millisecond duration as `1h 02m 03s`. Negative values (a running
/// timer) render as `running`.
pub fn format_duration_millis(value: &str) -> String {
    match value.trim().parse::<i64>() {
        Ok(millis) if millis < 0 => "running".to_string(),
        Ok(millis) => {
            let secs = Duration::from_millis(millis as u64).as_secs();
            format!("{}h {:02}m {:02}s", secs / 3600, (secs % 3600) / 60, secs % 60)
        }
        Err(_) => value.to_string(),
    }
}
