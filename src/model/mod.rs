//! Trip records, cities, and filter selections.

pub mod types;

pub use types::{City, Filter, Month, Selection, Trip, TripTable};
