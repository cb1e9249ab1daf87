//! Result types for the report sections.
//!
//! Each section computation returns one of these, or `None` when the
//! filtered table has no rows.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Time of travel
// ---------------------------------------------------------------------------

/// Most frequent times of travel.
///
/// `popular_month` and `popular_day` are only computed when the filter left
/// that column free to vary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// 1-based month number.
    pub popular_month: Option<u32>,
    /// Title-case weekday name.
    pub popular_day: Option<&'static str>,
    /// 0..=23
    pub popular_hour: u32,
}

// ---------------------------------------------------------------------------
// Stations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
    pub trips: usize,
}

/// Blank station cells are skipped; a field is `None` when every kept row
/// lacks that station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub popular_start: Option<String>,
    pub popular_end: Option<String>,
    /// Only trips with both stations recorded form a pair.
    pub popular_trip: Option<StationPair>,
}

// ---------------------------------------------------------------------------
// Trip duration
// ---------------------------------------------------------------------------

/// Duration aggregates in minutes.
///
/// Only rows with a duration contribute; negative values are not filtered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationMinutes {
    pub total: i64,
    pub mean: i64,
    pub shortest: f64,
    pub longest: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    /// Rows that had a duration.
    pub counted: usize,
    /// `None` when no kept row has a duration.
    pub minutes: Option<DurationMinutes>,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// Gender and birth-year figures, present only for cities that publish them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Demographics {
    pub genders: Vec<ValueCount>,
    /// `None` when every birth year in the filtered rows is missing.
    pub birth_years: Option<BirthYearStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<ValueCount>,
    pub demographics: Option<Demographics>,
}
