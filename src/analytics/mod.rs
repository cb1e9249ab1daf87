//! Trip statistics.
//!
//! Pure computations over a filtered [`TripTable`](crate::model::TripTable).
//! Nothing here prints; rendering lives in [`crate::report`].
//!
//! # Module structure
//!
//! - [`types`] — result structs for each report section
//! - [`bucketing`] — start time → month / weekday / hour columns
//! - [`derive`] — mode, value counts, minute conversions
//! - [`query`] — the four section computations

pub mod bucketing;
pub mod derive;
pub mod query;
pub mod types;

pub use query::{
    compute_station_stats, compute_time_stats, compute_trip_duration_stats, compute_user_stats,
};
pub use types::{
    BirthYearStats, Demographics, DurationMinutes, DurationStats, StationPair, StationStats,
    TimeStats, UserStats, ValueCount,
};
