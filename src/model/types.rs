//! Normalized trip structs and the selection types that narrow them.

use chrono::{NaiveDateTime, Weekday};

/// The three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Match a user answer (already trimmed) against the city names, ignoring case.
    pub fn parse(answer: &str) -> Option<City> {
        let answer = answer.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.key() == answer)
    }

    /// Lower-case name the user types.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }

    /// File name of the city's dataset inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }

    /// Whether the dataset carries the `Gender` and `Birth Year` columns.
    pub fn has_demographics(&self) -> bool {
        matches!(self, Self::Chicago | Self::NewYorkCity)
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chicago => write!(f, "Chicago"),
            Self::NewYorkCity => write!(f, "New York City"),
            Self::Washington => write!(f, "Washington"),
        }
    }
}

/// Months covered by the datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    pub fn parse(answer: &str) -> Option<Month> {
        let answer = answer.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|m| m.to_string().to_lowercase() == answer)
    }

    /// 1-based calendar month number.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
        };
        f.write_str(name)
    }
}

/// Full English weekday names, Monday first.
pub const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

/// Title-case name of a weekday, e.g. `"Tuesday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAYS[day.num_days_from_monday() as usize].1
}

/// Parse a full weekday name, ignoring case. Abbreviations are rejected.
pub fn parse_weekday(answer: &str) -> Option<Weekday> {
    let answer = answer.trim().to_lowercase();
    WEEKDAYS
        .iter()
        .find(|(_, name)| name.to_lowercase() == answer)
        .map(|(day, _)| *day)
}

/// Row filter for a session. At most one of month or day narrows the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    ByMonth(Month),
    ByDay(Weekday),
}

impl Filter {
    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            Self::All => true,
            Self::ByMonth(month) => trip.month == month.number(),
            Self::ByDay(day) => trip.weekday == *day,
        }
    }

    /// True when the month column still varies after filtering.
    pub fn spans_months(&self) -> bool {
        !matches!(self, Self::ByMonth(_))
    }

    /// True when the weekday column still varies after filtering.
    pub fn spans_weekdays(&self) -> bool {
        !matches!(self, Self::ByDay(_))
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::ByMonth(month) => write!(f, "month={month}"),
            Self::ByDay(day) => write!(f, "day={}", weekday_name(*day)),
        }
    }
}

/// A validated city plus filter, as collected by the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub filter: Filter,
}

/// One bike trip with its calendar columns derived from `start_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// 0-based position of the row in the source file.
    pub index: usize,
    pub start_time: NaiveDateTime,
    pub end_time: String,
    /// Seconds. Missing cells stay `None`.
    pub duration_secs: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    /// 1..=12
    pub month: u32,
    pub weekday: Weekday,
    /// 0..=23
    pub hour: u32,
}

impl Trip {
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

/// The filtered trips of one session, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub city: City,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(city: City, trips: Vec<Trip>) -> Self {
        Self { city, trips }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Rows `[offset, offset + len)`, clamped to the table. Empty past the end.
    pub fn rows(&self, offset: usize, len: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(len).min(self.trips.len());
        &self.trips[start..end]
    }
}
