//! Section computations over a filtered trip table.
//!
//! All functions take the table by reference and return `None` when it has
//! no rows, so every report section treats an empty filter result the same
//! way.

use crate::model::{Filter, TripTable};

use super::derive::{self, mode, mode_with_count, value_counts};
use super::types::*;

/// Most frequent month, weekday, and start hour.
pub fn compute_time_stats(table: &TripTable, filter: &Filter) -> Option<TimeStats> {
    let popular_hour = mode(table.iter().map(|t| t.hour))?;

    let popular_month = if filter.spans_months() {
        mode(table.iter().map(|t| t.month))
    } else {
        None
    };
    // Mode over the names, so ties fall to the alphabetically first day.
    let popular_day = if filter.spans_weekdays() {
        mode(table.iter().map(|t| t.weekday_name()))
    } else {
        None
    };

    Some(TimeStats {
        popular_month,
        popular_day,
        popular_hour,
    })
}

/// Most popular start station, end station, and start/end combination.
///
/// Blank station cells are left out of every count.
pub fn compute_station_stats(table: &TripTable) -> Option<StationStats> {
    if table.is_empty() {
        return None;
    }

    let popular_start = mode(table.iter().filter_map(|t| t.start_station.as_deref()));
    let popular_end = mode(table.iter().filter_map(|t| t.end_station.as_deref()));
    let popular_trip = mode_with_count(
        table
            .iter()
            .filter_map(|t| Some((t.start_station.as_deref()?, t.end_station.as_deref()?))),
    )
    .map(|((start, end), trips)| StationPair {
        start: start.to_string(),
        end: end.to_string(),
        trips,
    });

    Some(StationStats {
        popular_start: popular_start.map(str::to_string),
        popular_end: popular_end.map(str::to_string),
        popular_trip,
    })
}

/// Total, mean, shortest, and longest trip in minutes.
pub fn compute_trip_duration_stats(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }

    let durations: Vec<f64> = table.iter().filter_map(|t| t.duration_secs).collect();
    let sum: f64 = durations.iter().sum();
    let minutes = match (
        derive::safe_mean(sum, durations.len()),
        durations.iter().copied().reduce(f64::min),
        durations.iter().copied().reduce(f64::max),
    ) {
        (Some(mean), Some(shortest), Some(longest)) => Some(DurationMinutes {
            total: derive::whole_minutes(sum),
            mean: derive::whole_minutes(mean),
            shortest: derive::minutes_2dp(shortest),
            longest: derive::minutes_2dp(longest),
        }),
        _ => None,
    };

    Some(DurationStats {
        counted: durations.len(),
        minutes,
    })
}

/// User type counts, plus gender and birth-year figures where the city has them.
pub fn compute_user_stats(table: &TripTable) -> Option<UserStats> {
    if table.is_empty() {
        return None;
    }

    let user_types = value_counts(table.iter().filter_map(|t| t.user_type.as_deref()));

    let demographics = table.city.has_demographics().then(|| {
        let genders = value_counts(table.iter().filter_map(|t| t.gender.as_deref()));
        let years: Vec<i64> = table
            .iter()
            .filter_map(|t| t.birth_year)
            .map(|y| y.round() as i64)
            .collect();
        let birth_years = match (years.iter().min(), years.iter().max(), mode(years.iter())) {
            (Some(&earliest), Some(&most_recent), Some(&most_common)) => Some(BirthYearStats {
                earliest,
                most_recent,
                most_common,
            }),
            _ => None,
        };
        Demographics {
            genders,
            birth_years,
        }
    });

    Some(UserStats {
        user_types,
        demographics,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
