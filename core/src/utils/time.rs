use chrono::{DateTime, SecondsFormat};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Return time now in seconds or 0
pub(crate) fn time_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::new(0, 0))
        .as_secs()
}

/// Convert Windows filetime values to unixepoch
pub(crate) fn filetime_to_unixepoch(filetime: &u64) -> i64 {
    let windows_nano = 10000000;
    let seconds_to_unix: i64 = 11644473600;

    // We should not overflow because of the division.
    (filetime / windows_nano) as i64 - seconds_to_unix
}

/// Convert unixepoch seconds to an ISO8601 timestamp string
pub(crate) fn unixepoch_to_iso(timestamp: &i64) -> String {
    let date_result = DateTime::from_timestamp(*timestamp, 0);
    match date_result {
        Some(result) => result.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => String::new(),
    }
}
