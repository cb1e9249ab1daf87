//! Calendar bucketing of trip start times.
//!
//! Converts a parsed start timestamp into the month / weekday / hour keys
//! the filters and time-of-travel stats group by.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Calendar columns derived from one start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarBuckets {
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

/// Derive month (1..=12), weekday, and hour (0..=23) from a start time.
pub fn calendar_buckets(ts: &NaiveDateTime) -> CalendarBuckets {
    CalendarBuckets {
        month: ts.month(),
        weekday: ts.weekday(),
        hour: ts.hour(),
    }
}

/// Full English name of a 1-based month number, e.g. `7` → `"July"`.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Format an hour bucket the way reports show it (`17` → `"17:00"`).
pub fn hour_label(hour: u32) -> String {
    format!("{hour}:00")
}

const START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a `Start Time` cell. Accepts a space or `T` separator and optional
/// fractional seconds.
pub fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
