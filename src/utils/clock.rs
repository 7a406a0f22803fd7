// * Wall-clock reading and formatting for the verification page.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, Utc};
use tracing::warn;

// Format rendered on the page, e.g. "2024-01-01 00:00:00"
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Substituted when the clock reading cannot be represented, so the page
// always carries a complete, non-empty timestamp
pub const FALLBACK_TIMESTAMP: &str = "1970-01-01 00:00:00";

/// Reads the system clock and formats it for the page, substituting the
/// fixed fallback timestamp if the reading cannot be represented.
pub fn current_timestamp() -> String {
    timestamp_or_fallback(SystemTime::now())
}

/// Formats a clock reading for the page, substituting the fixed fallback
/// timestamp if the reading cannot be represented. Always returns a
/// complete, non-empty timestamp string.
pub fn timestamp_or_fallback(reading: SystemTime) -> String {
    format_timestamp(reading).unwrap_or_else(|| {
        warn!("Clock reading could not be formatted; using '{FALLBACK_TIMESTAMP}'");
        FALLBACK_TIMESTAMP.to_string()
    })
}

/// Formats a clock reading as `YYYY-MM-DD HH:MM:SS` in server local time.
/// Returns `None` for readings before the Unix epoch or outside chrono's
/// calendar range.
pub fn format_timestamp(reading: SystemTime) -> Option<String> {
    let unix: Duration = reading.duration_since(UNIX_EPOCH).ok()?;
    let utc: DateTime<Utc> = DateTime::from_timestamp(unix.as_secs() as i64, unix.subsec_nanos())?;

    Some(utc.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn formats_the_reading_as_a_wall_clock_timestamp() {
        let formatted: String = format_timestamp(SystemTime::now()).expect("clock is in range");

        assert_eq!(formatted.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&formatted, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn rejects_readings_before_the_unix_epoch() {
        let before_epoch: SystemTime = UNIX_EPOCH - Duration::from_secs(1);

        assert_eq!(format_timestamp(before_epoch), None);
    }

    #[test]
    fn fallback_timestamp_matches_the_page_format() {
        assert!(NaiveDateTime::parse_from_str(FALLBACK_TIMESTAMP, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn substitutes_the_fallback_for_an_unrepresentable_reading() {
        let before_epoch: SystemTime = UNIX_EPOCH - Duration::from_secs(1);

        assert_eq!(timestamp_or_fallback(before_epoch), FALLBACK_TIMESTAMP);
    }

    #[test]
    fn passes_representable_readings_through_unchanged() {
        let reading: SystemTime = SystemTime::now();

        assert_eq!(
            timestamp_or_fallback(reading),
            format_timestamp(reading).expect("clock is in range")
        );
    }

    #[test]
    fn current_timestamp_is_never_empty() {
        assert!(!current_timestamp().is_empty());
    }
}
