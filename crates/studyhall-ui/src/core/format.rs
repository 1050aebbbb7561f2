//! Human-readable formatting for sizes and timestamps.
//!
//! # Design
//! - Mirror what the browser renders for `en-US` so server-rendered and
//!   client-rendered labels agree.
//! - Never fail: unparseable dates render as `Invalid Date`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const INVALID_DATE: &str = "Invalid Date";

/// Format a byte count with a binary (1024) unit, rounded to two decimals.
///
/// Trailing zeros are dropped, so `1024` renders as `1 KB` and `1536` as
/// `1.5 KB`. Anything past the gigabyte range stays in GB.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    let mut divisor = 1_u64;
    while unit + 1 < SIZE_UNITS.len() && bytes / divisor >= 1024 {
        divisor *= 1024;
        unit += 1;
    }
    #[allow(clippy::cast_precision_loss)]
    let scaled = bytes as f64 / divisor as f64;
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{rounded} {}", SIZE_UNITS[unit])
}

/// Render a date as `Mar 5, 2024`.
#[must_use]
pub fn format_date(input: &str) -> String {
    parse_timestamp(input).map_or_else(
        || INVALID_DATE.to_string(),
        |value| value.format("%b %-d, %Y").to_string(),
    )
}

/// Render a date and time as `Mar 5, 2024, 02:07 PM`.
#[must_use]
pub fn format_date_time(input: &str) -> String {
    parse_timestamp(input).map_or_else(
        || INVALID_DATE.to_string(),
        |value| value.format("%b %-d, %Y, %I:%M %p").to_string(),
    )
}

/// Parse the timestamp shapes the portal backend emits.
///
/// Offsets are kept as written: the wall-clock time in the input's own zone is
/// what gets rendered.
fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(value.naive_local());
    }
    if let Ok(value) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(value.naive_local());
    }
    for pattern in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(value) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Some(value);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_matches_browser_rendering() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(5_452_595), "5.2 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn file_size_stays_in_gigabytes_past_the_unit_list() {
        assert_eq!(format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn dates_render_in_us_short_form() {
        assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
        assert_eq!(format_date("2024-12-25 08:30:00"), "Dec 25, 2024");
        assert_eq!(format_date("Tue, 05 Mar 2024 14:07:00 GMT"), "Mar 5, 2024");
    }

    #[test]
    fn date_times_append_twelve_hour_clock() {
        assert_eq!(
            format_date_time("2024-03-05T14:07:00Z"),
            "Mar 5, 2024, 02:07 PM"
        );
        assert_eq!(
            format_date_time("2024-03-05 09:15:42.123"),
            "Mar 5, 2024, 09:15 AM"
        );
        assert_eq!(format_date_time("2024-03-05"), "Mar 5, 2024, 12:00 AM");
    }

    #[test]
    fn invalid_dates_render_placeholder() {
        assert_eq!(format_date("nope"), "Invalid Date");
        assert_eq!(format_date_time(""), "Invalid Date");
        assert_eq!(format_date("2024-02-30"), "Invalid Date");
    }
}
