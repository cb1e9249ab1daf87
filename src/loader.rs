//! Loading a city's trip CSV into a filtered [`TripTable`].

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::analytics::bucketing::{calendar_buckets, parse_start_time};
use crate::model::{City, Filter, Trip, TripTable};

/// Columns every city's file must have.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// Extra columns required for cities that publish demographics.
pub const DEMOGRAPHIC_COLUMNS: [&str; 2] = ["Gender", "Birth Year"];

/// Errors that abort a load. None of these are retried.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read trip data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Unparsable start time '{value}' in row {row}")]
    StartTime { row: usize, value: String },
}

#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    start_station: Option<String>,
    #[serde(rename = "End Station")]
    end_station: Option<String>,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_trip(self, index: usize) -> Result<Trip, LoadError> {
        let start_time =
            parse_start_time(&self.start_time).ok_or_else(|| LoadError::StartTime {
                row: index,
                value: self.start_time.clone(),
            })?;
        let buckets = calendar_buckets(&start_time);
        Ok(Trip {
            index,
            start_time,
            end_time: self.end_time,
            duration_secs: self.trip_duration,
            start_station: self.start_station,
            end_station: self.end_station,
            user_type: self.user_type,
            gender: self.gender,
            birth_year: self.birth_year,
            month: buckets.month,
            weekday: buckets.weekday,
            hour: buckets.hour,
        })
    }
}

/// Path of a city's dataset under `data_dir`.
pub fn dataset_path(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.file_name())
}

/// Load `city`'s dataset from `data_dir` and keep the rows `filter` selects.
pub fn load_data(data_dir: &Path, city: City, filter: Filter) -> Result<TripTable, LoadError> {
    let path = dataset_path(data_dir, city);
    info!(path = %path.display(), %city, %filter, "Loading trip data");
    let file = File::open(&path).map_err(|source| LoadError::Open {
        path: path.clone(),
        source,
    })?;
    load_from_reader(file, city, filter)
}

/// Parse CSV trip data from any reader, derive calendar columns, and filter.
///
/// Source order and source row indices are preserved.
pub fn load_from_reader<R: Read>(
    reader: R,
    city: City,
    filter: Filter,
) -> Result<TripTable, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    check_columns(rdr.headers()?, city)?;

    let mut trips = Vec::new();
    let mut total = 0usize;
    for (index, record) in rdr.deserialize::<RawTrip>().enumerate() {
        total += 1;
        let trip = record?.into_trip(index)?;
        if filter.matches(&trip) {
            trips.push(trip);
        }
    }

    debug!(total, kept = trips.len(), %filter, "Filtered trip rows");
    Ok(TripTable::new(city, trips))
}

fn check_columns(headers: &csv::StringRecord, city: City) -> Result<(), LoadError> {
    let has = |name: &str| headers.iter().any(|h| h.trim() == name);
    let demographic: &[&'static str] = if city.has_demographics() {
        &DEMOGRAPHIC_COLUMNS
    } else {
        &[]
    };
    match REQUIRED_COLUMNS
        .iter()
        .chain(demographic)
        .find(|col| !has(**col))
    {
        Some(col) => Err(LoadError::MissingColumn(*col)),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
